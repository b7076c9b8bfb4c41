//! Entity and payload types as the backend serializes them.
//!
//! Dates travel as `YYYY-MM-DD`, times as `HH:MM:SS`.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A race meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
	/// Identifier.
	pub id: i64,
	/// Day of the race.
	pub date: NaiveDate,
	/// Start time.
	pub time: NaiveTime,
	/// Venue.
	pub hippodrome: String,
	/// Optional title.
	#[serde(default)]
	pub name: Option<String>,
}

/// Payload for creating a race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceCreate {
	/// Day of the race.
	pub date: NaiveDate,
	/// Start time.
	pub time: NaiveTime,
	/// Venue.
	pub hippodrome: String,
	/// Optional title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

/// One finisher of a race, with display names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantResult {
	/// Jockey's name.
	pub jockey_name: String,
	/// Horse's nickname.
	pub horse_name: String,
	/// Finishing place, starting at 1.
	pub place: i32,
	/// Finishing time, when recorded.
	#[serde(default)]
	pub time_result: Option<NaiveTime>,
}

/// A race and its results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceWithParticipants {
	/// The race.
	pub race: Race,
	/// Results, in backend order.
	pub participants: Vec<ParticipantResult>,
}

/// A jockey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jockey {
	/// Identifier.
	pub id: i64,
	/// Full name.
	pub name: String,
	/// Postal address.
	pub address: String,
	/// Age in years.
	pub age: i32,
	/// Rating points.
	pub rating: i32,
}

/// Payload for creating a jockey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JockeyCreate {
	/// Full name.
	pub name: String,
	/// Postal address.
	pub address: String,
	/// Age in years.
	pub age: i32,
	/// Rating points.
	pub rating: i32,
}

/// A horse's sex, as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
	/// Stallion.
	#[serde(rename = "жеребец")]
	Stallion,
	/// Mare.
	#[serde(rename = "кобыла")]
	Mare,
	/// Gelding.
	#[serde(rename = "мерин")]
	Gelding,
}

impl Gender {
	/// Returns the label shown in the UI.
	pub fn label(self) -> &'static str {
		match self {
			Self::Stallion => "жеребец",
			Self::Mare => "кобыла",
			Self::Gelding => "мерин",
		}
	}
}

impl fmt::Display for Gender {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// A horse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horse {
	/// Identifier.
	pub id: i64,
	/// Nickname.
	pub nickname: String,
	/// Sex.
	pub gender: Gender,
	/// Age in years.
	pub age: i32,
	/// Owning [`Owner`].
	pub owner_id: i64,
}

/// Payload for creating a horse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorseCreate {
	/// Nickname.
	pub nickname: String,
	/// Sex.
	pub gender: Gender,
	/// Age in years.
	pub age: i32,
	/// Owning [`Owner`].
	pub owner_id: i64,
}

/// A horse owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
	/// Identifier.
	pub id: i64,
	/// Full name.
	pub name: String,
	/// Postal address.
	pub address: String,
	/// Phone number.
	pub phone: String,
}

/// Payload for creating an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerCreate {
	/// Full name.
	pub name: String,
	/// Postal address.
	pub address: String,
	/// Phone number.
	pub phone: String,
}

/// A race entry with its result, by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
	/// Identifier.
	pub id: i64,
	/// The race.
	pub race_id: i64,
	/// The jockey.
	pub jockey_id: i64,
	/// The horse.
	pub horse_id: i64,
	/// Finishing place, starting at 1.
	pub place: i32,
	/// Finishing time, when recorded.
	#[serde(default)]
	pub time_result: Option<NaiveTime>,
}

/// Payload for recording a race result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantCreate {
	/// The race.
	pub race_id: i64,
	/// The jockey.
	pub jockey_id: i64,
	/// The horse.
	pub horse_id: i64,
	/// Finishing place, starting at 1.
	pub place: i32,
	/// Finishing time, when recorded.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub time_result: Option<NaiveTime>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_race_with_participants_from_backend_json() {
		let json = r#"{
			"race": {"id": 3, "date": "2024-05-01", "time": "14:30:00", "hippodrome": "Central", "name": null},
			"participants": [
				{"jockey_name": "Ivanov", "horse_name": "Thunder", "place": 1, "time_result": "00:01:58"},
				{"jockey_name": "Petrov", "horse_name": "Breeze", "place": 2}
			]
		}"#;

		let race: RaceWithParticipants = serde_json::from_str(json).unwrap();

		assert_eq!(race.race.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
		assert_eq!(race.race.name, None);
		assert_eq!(
			race.participants[0].time_result,
			NaiveTime::from_hms_opt(0, 1, 58)
		);
		assert_eq!(race.participants[1].time_result, None);
	}

	#[rstest]
	#[case("\"жеребец\"", Gender::Stallion)]
	#[case("\"кобыла\"", Gender::Mare)]
	#[case("\"мерин\"", Gender::Gelding)]
	fn test_gender_wire_names(#[case] json: &str, #[case] expected: Gender) {
		let gender: Gender = serde_json::from_str(json).unwrap();
		assert_eq!(gender, expected);
		assert_eq!(serde_json::to_string(&gender).unwrap(), json);
		assert_eq!(format!("\"{}\"", gender), json);
	}

	#[rstest]
	fn test_unknown_gender_is_rejected() {
		assert!(serde_json::from_str::<Gender>("\"pony\"").is_err());
	}

	#[rstest]
	fn test_race_create_omits_missing_name() {
		let payload = RaceCreate {
			date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
			time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
			hippodrome: "North".to_string(),
			name: None,
		};

		assert_eq!(
			serde_json::to_string(&payload).unwrap(),
			r#"{"date":"2024-06-02","time":"12:00:00","hippodrome":"North"}"#
		);
	}
}
