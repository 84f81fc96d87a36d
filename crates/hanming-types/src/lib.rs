//! Domain types of the Hanming name generator: what the user asks for
//! ([`request`]), what comes back ([`name`]), the prompt that connects the two
//! ([`fragments`]) and the strings shown along the way ([`locale`]).
pub mod fragments;
pub mod locale;
pub mod name;
pub mod request;
