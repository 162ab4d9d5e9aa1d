//! User-facing text (Portuguese)

use lootlens_domain::Facet;

pub const TITLE: &str = "Catálogo de Itens";
pub const LOADING: &str = "Carregando itens...";
pub const LOAD_ERROR: &str = "Erro ao carregar os dados. Por favor, verifique se o arquivo dados.json está formatado corretamente.";
pub const NO_MATCH: &str = "Nenhum item encontrado com os filtros selecionados.";
pub const NO_FILTER: &str = "Todos";
pub const CLEAR_FILTERS: &str = "Limpar filtros";

pub const PRICE_LABEL: &str = "Preço Médio:";
pub const CLASS_LABEL: &str = "Classe:";
pub const TYPE_LABEL: &str = "Tipo:";
pub const ADDONS_LABEL: &str = "Adicionais:";
pub const LEVEL_LABEL: &str = "Nível:";
pub const HISTORY_TITLE: &str = "Histórico de preço";

pub const REPORT_PLACEHOLDER: &str = "Descreva o problema encontrado";
pub const REPORT_BUTTON: &str = "Relatar Problema";
pub const REPORT_SENDING: &str = "Enviando...";
pub const REPORT_SENT: &str = "Obrigado! O problema foi relatado.";
pub const REPORT_EMPTY: &str = "Escreva uma mensagem antes de enviar.";
pub const REPORT_FAILED: &str = "Não foi possível enviar o relato. Tente novamente.";

/// Dropdown label for a facet
pub fn facet_label(facet: Facet) -> &'static str {
    match facet {
        Facet::Class => "Classe",
        Facet::Type => "Tipo",
        Facet::Name => "Nome",
        Facet::Addons => "Adicionais",
        Facet::Level => "Nível",
    }
}

/// "12 itens" / "1 item"
pub fn item_count(count: usize) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{n} itens"),
    }
}
