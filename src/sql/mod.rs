//! Fixed SQL over the `imoveis` table: identifiers are constants, values are always `$n` parameters.

mod statements;
pub use statements::*;
