//! Fixed name pools. Draws are uniform over each slice, so the two `Maria`
//! entries give that name twice the weight.

/// First names.
pub const FIRST_NAMES: [&str; 19] = [
    "Miguel", "Arthur", "Gael", "Heitor", "Theo", "Davi", "Gabriel", "Bernardo", "Samuel",
    "Helena", "Alice", "Laura", "Maria", "Valentina", "Heloísa", "Maria", "Cecília", "Maitê",
    "Liz",
];

/// Surnames, also used as company name stems.
pub const LAST_NAMES: [&str; 15] = [
    "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira", "Lima",
    "Gomes", "Costa", "Ribeiro", "Martins", "Carvalho", "Almeida",
];

/// Company name suffixes.
pub const COMPANY_SUFFIXES: [&str; 6] = [
    "Ltda",
    "S.A.",
    "e Associados",
    "Soluções Digitais",
    "Group",
    "Consultoria",
];
