/// Literal-to-array conversion command.
pub mod cast;
/// Container header listing command.
pub mod info;
/// Single array load command.
pub mod load;
/// Model schema command.
pub mod schema;
/// Model document validation command.
pub mod validate;

mod util;
