//! # Document Families
//!
//! One module per check-digit document. Each exposes its [`Family`]
//! record as `FAMILY`, thin `generate` / `check` / `validate` wrappers, and
//! the raw check-digit arithmetic the shared engine dispatches to.
//!
//! | Module | Document | Length | Mask |
//! |---|---|---|---|
//! | [`cpf`] | CPF | 11 | `###.###.###-##` |
//! | [`cnpj`] | CNPJ | 14 | `##.###.###/####-##` |
//! | [`rg`] | RG (SP) | 9 | `##.###.###-#` |
//! | [`cnh`] | CNH | 11 | — |
//! | [`titulo`] | Título de Eleitor | 12 | `#### #### ####` |
//! | [`pis`] | PIS/PASEP | 11 | `###.#####.##-#` |
//! | [`renavam`] | RENAVAM | 11 | — |
//! | [`ie`] | Inscrição Estadual (SP) | 12 | `###.###.###.###` |
//! | [`card`] | Credit card (Luhn) | 16 | `#### #### #### ####` |
//! | [`certidao`] | Certidão civil | 32 | `###### ## ## #### # ##### ### ####### ##` |
//!
//! [`Family`]: crate::family::Family

pub mod card;
pub mod certidao;
pub mod cnh;
pub mod cnpj;
pub mod cpf;
pub mod ie;
pub mod pis;
pub mod renavam;
pub mod rg;
pub mod titulo;
