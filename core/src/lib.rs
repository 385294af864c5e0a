//! dutysplit-core: a deterministic duty-splitting engine.
//!
//! Feed it a duty roster (two people per day), a table of recurring duties
//! pinned to teams, and a table of stochastic surprise duties, and it
//! divides each day's unclaimed work between the two rostered people so
//! that total expected workloads, and secondarily uncertainty exposure,
//! come out as even as possible.
//!
//! Pipeline, per day:
//!   1. assign: claim team-pinned duties and (day, team) surprises
//!   2. costs:  aggregate fixed workloads, derive the pair's gap
//!   3. pool:   collect everything unclaimed, merged by name
//!   4. split:  enumerate all 2^n two-group partitions and rank them
//!
//! `keyfile` and `ingest` normalize caller spreadsheets into typed records,
//! `report` renders a solved day, and `plan` wires the stages together.

pub mod assign;
pub mod costs;
pub mod error;
pub mod ingest;
pub mod keyfile;
pub mod plan;
pub mod pool;
pub mod profile;
pub mod record;
pub mod report;
pub mod split;
pub mod types;
