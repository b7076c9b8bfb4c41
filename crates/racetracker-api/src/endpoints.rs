//! Endpoint paths, relative to the API root.

/// `GET` list / `POST` create races.
pub const RACES: &str = "/races";
/// `GET` list / `POST` create jockeys.
pub const JOCKEYS: &str = "/jockeys";
/// `GET` list / `POST` create horses.
pub const HORSES: &str = "/horses";
/// `GET` list / `POST` create owners.
pub const OWNERS: &str = "/owners";
/// `GET` list / `POST` add race participants.
pub const PARTICIPANTS: &str = "/participants";

/// A race together with its participants.
pub fn race(id: i64) -> String {
	format!("{}/{}", RACES, id)
}

/// A single jockey.
pub fn jockey(id: i64) -> String {
	format!("{}/{}", JOCKEYS, id)
}

/// The races a jockey rode in.
pub fn jockey_races(id: i64) -> String {
	format!("{}/{}/races", JOCKEYS, id)
}

/// A single horse.
pub fn horse(id: i64) -> String {
	format!("{}/{}", HORSES, id)
}

/// The races a horse ran in.
pub fn horse_races(id: i64) -> String {
	format!("{}/{}/races", HORSES, id)
}

/// A single owner.
pub fn owner(id: i64) -> String {
	format!("{}/{}", OWNERS, id)
}
