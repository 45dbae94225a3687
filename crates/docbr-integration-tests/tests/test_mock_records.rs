//! # Composite Records
//!
//! Every document embedded in a mock record validates on its own, and the
//! records serialize with Portuguese field names.

use docbr_documents::families::{card, cnpj, cpf, ie, renavam, rg};
use docbr_documents::plate;
use docbr_mock::{
    generate_bank_account, generate_company, generate_credit_card, generate_person,
    generate_vehicle,
    names::{FIRST_NAMES, LAST_NAMES},
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn person_documents_validate(seed in any::<u64>(), masked in any::<bool>()) {
        let person = generate_person(&mut StdRng::seed_from_u64(seed), masked);
        prop_assert!(cpf::validate(&person.cpf));
        prop_assert!(rg::validate(&person.rg));
        let (first, last) = person.name.split_once(' ').unwrap();
        prop_assert!(FIRST_NAMES.contains(&first));
        prop_assert!(LAST_NAMES.contains(&last));
    }

    #[test]
    fn company_documents_validate(seed in any::<u64>(), masked in any::<bool>()) {
        let company = generate_company(&mut StdRng::seed_from_u64(seed), masked);
        prop_assert!(cnpj::validate(&company.cnpj));
        prop_assert!(ie::validate(&company.ie));
    }

    #[test]
    fn vehicle_documents_validate(seed in any::<u64>()) {
        let vehicle = generate_vehicle(&mut StdRng::seed_from_u64(seed));
        prop_assert!(plate::validate(&vehicle.plate));
        prop_assert!(renavam::validate(&vehicle.renavam));
    }

    #[test]
    fn credit_card_validates(seed in any::<u64>(), masked in any::<bool>()) {
        let card_record = generate_credit_card(&mut StdRng::seed_from_u64(seed), masked);
        prop_assert!(card::validate(&card_record.number));
    }
}

#[test]
fn bank_account_shape() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let account = generate_bank_account(&mut rng);
        assert!(["001", "237", "341", "104", "033"].contains(&account.bank.as_str()));
        assert_eq!(account.branch.len(), 4);
        assert_eq!(account.account.len(), 8);
        assert_eq!(account.digit.len(), 1);
        let rendered = account.to_string();
        assert_eq!(rendered.len(), "BBB / AAAA / CCCCCCCC-D".len());
    }
}

#[test]
fn records_serialize_to_json_objects() {
    let mut rng = StdRng::seed_from_u64(8);
    let person = serde_json::to_value(generate_person(&mut rng, true)).unwrap();
    assert_eq!(person.as_object().unwrap().len(), 3);
    assert!(person.get("nome").is_some());

    let company = serde_json::to_value(generate_company(&mut rng, true)).unwrap();
    for key in ["nome", "cnpj", "ie"] {
        assert!(company.get(key).is_some(), "{key}");
    }

    let account = serde_json::to_value(generate_bank_account(&mut rng)).unwrap();
    for key in ["banco", "agencia", "conta", "digito"] {
        assert!(account.get(key).is_some(), "{key}");
    }
}

#[test]
fn seeded_records_repeat() {
    let a = generate_person(&mut StdRng::seed_from_u64(99), true);
    let b = generate_person(&mut StdRng::seed_from_u64(99), true);
    assert_eq!(a, b);
}
