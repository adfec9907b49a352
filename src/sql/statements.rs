//! Parameterized statements for every property operation.

/// Select list in the positional order `Property::from_row` expects.
/// `valor` is read as float8 so it decodes as `f64`.
macro_rules! select_properties {
    ($tail:literal) => {
        concat!(
            "SELECT id, logradouro, tipo_logradouro, bairro, cidade, cep, tipo, ",
            "valor::float8 AS valor, data_aquisicao FROM imoveis",
            $tail
        )
    };
}

pub const COLUMNS: [&str; 9] = [
    "id",
    "logradouro",
    "tipo_logradouro",
    "bairro",
    "cidade",
    "cep",
    "tipo",
    "valor",
    "data_aquisicao",
];

pub const SELECT_ALL: &str = select_properties!("");
pub const SELECT_BY_ID: &str = select_properties!(" WHERE id = $1");
pub const SELECT_BY_TIPO: &str = select_properties!(" WHERE tipo = $1");
pub const SELECT_BY_CIDADE: &str = select_properties!(" WHERE cidade = $1");

pub const EXISTS_BY_ID: &str = "SELECT EXISTS (SELECT 1 FROM imoveis WHERE id = $1)";

pub const INSERT: &str = "INSERT INTO imoveis \
    (logradouro, tipo_logradouro, bairro, cidade, cep, tipo, valor, data_aquisicao) \
    VALUES ($1, $2, $3, $4, $5, $6, $7::numeric, $8) RETURNING id";

pub const UPDATE_BY_ID: &str = "UPDATE imoveis SET \
    logradouro = $1, tipo_logradouro = $2, bairro = $3, cidade = $4, cep = $5, tipo = $6, \
    valor = $7::numeric, data_aquisicao = $8 WHERE id = $9";

pub const DELETE_BY_ID: &str = "DELETE FROM imoveis WHERE id = $1";

pub const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS imoveis (
        id BIGSERIAL PRIMARY KEY,
        logradouro TEXT NOT NULL,
        tipo_logradouro TEXT NOT NULL,
        bairro TEXT NOT NULL,
        cidade TEXT NOT NULL,
        cep TEXT NOT NULL,
        tipo TEXT NOT NULL,
        valor NUMERIC(14, 2) NOT NULL,
        data_aquisicao DATE NOT NULL
    )
"#;
