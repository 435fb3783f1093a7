//! Convert geographic coordinates between
//! decimal degrees (DD), degrees and decimal minutes (DM)
//! and degrees, minutes and decimal seconds (DMS).
//!
//! Every format is displayed with a configurable number of decimals,
//! and the displayed text can be parsed back to reveal the drift
//! introduced by the precision loss (see [`round_trip()`]).

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(indirect_structural_match)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_crate_level_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_doc_code_examples)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(pointer_structural_match)]
#![warn(private_doc_tests)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// the whole degrees are always in range [0..180]
#![allow(clippy::cast_possible_truncation)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    dd::DegreeValue, dm::DegMin, dms::DegMinSec, ConvertOptions, FormatError, OutOfRange,
    ParseError, Sexagesimal, DEFAULT_PRECISION, MAX_DECIMALS,
};
pub use config::PrecisionSettings;
pub use coord::{
    dd_pair_to_dm, dd_pair_to_dms, dm_pair_to_dd, dms_pair_to_dd, format_dd, format_dd_pair,
    format_dm, format_dm_pair, format_dms, format_dms_pair, parse_pair_to_dd,
    parse_to_degree_value, Axis, Components, Notation, ParseDirectionError, ParsePoleError,
    ParseSignError, ParsedInput, Pole, RawCoordinate, RotationalDirection, Sign,
};
pub use round_trip::{
    is_valid_coordinate, round_trip, Conversion, ConversionError, RoundTripReport,
    ValidationError,
};

mod angle;
mod config;
mod coord;
mod round_trip;
mod utils;
