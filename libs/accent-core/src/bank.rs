//! Built-in question bank.

use crate::error::Result;
use crate::parser::parse;
use crate::types::Question;

/// Default questions, in the question bank format.
pub const DEFAULT_BANK: &str = "\
ID: 1
Q: ¿Cuál es la sílaba tónica de 'café'?
O: ca-FE
O: CA-fe
O: ca-fe
A: ca-FE
R: Aguda terminada en vocal. Las palabras agudas llevan tilde cuando terminan en vocal, n o s.

ID: 2
Q: Escribe la palabra 'arbol' con la acentuación correcta.
A: árbol
R: Llana terminada en consonante (no n, s). Las palabras llanas llevan tilde cuando NO terminan en vocal, n o s.

ID: 3
Q: Elige la opción correcta: 'El' o 'Él' es un pronombre personal.
O: El
O: Él
A: Él
R: Tilde diacrítica: 'Él' es pronombre personal, 'El' es artículo.
";

/// Parse the built-in question bank.
pub fn default_bank() -> Result<Vec<Question>> {
    parse(DEFAULT_BANK)
}
