//! Valuation multiple scorers.
//!
//! Lower multiples score higher on every table in this module, except the
//! narrow P/E bands around 23 that the rubric singles out.

pub mod ev_ebitda;
pub mod pb;
pub mod pe;
pub mod ps;

pub use ev_ebitda::{EV_EBITDA_BANDS, score_ev_ebitda};
pub use pb::{PB_BANDS, score_pb};
pub use pe::{PE_BANDS, score_pe};
pub use ps::{PS_BANDS, score_ps};
