// Utils module - Shared OIDs and effective dates for the lint catalog

pub mod dates;
pub mod oids;
