//! Simple test fixtures used across unit tests.

/// A small catalog document in the wire format
pub const SAMPLE_CATALOG: &str = r#"[
    {
        "nome": "Espada Longa",
        "classe": "Warrior",
        "tipo": "Arma",
        "precoMedio": 1500,
        "adicionais": ["+2", "Fogo"],
        "nivel": ["10"],
        "historicoPreco": [1400, 1450, 1500]
    },
    {
        "nome": "Cajado",
        "classe": "Mage",
        "tipo": "Arma",
        "precoMedio": 900.5,
        "adicionais": ["+10"],
        "nivel": ["20", "25"]
    },
    {
        "nome": "Elmo",
        "classe": "Warrior",
        "tipo": "Armadura",
        "precoMedio": 300,
        "adicionais": [],
        "nivel": ["5"],
        "historicoPreco": [300]
    }
]"#;

pub fn network_failure(msg: &str) -> crate::ports::outbound::LoadError {
    crate::ports::outbound::LoadError::Network(msg.to_string())
}
