/// Bank category -> budget category. Keys are kept exactly as the bank
/// exports them, including the double space in "Поставщик  услуг".
const CATEGORY_MAP: &[(&str, &str)] = &[
    ("Магазины продуктовые", "Продукты и заморозка"),
    ("Ресторация / бары / кафе", "Кафе и доставки"),
    ("Аптеки", "Здоровье"),
    ("Медицинский сервис", "Здоровье"),
    ("Поставщик  услуг", "Здоровье"),
    ("Магазины одежды", "Шопинг"),
    ("Различные магазины", "Шопинг"),
    ("Прочее", "Шопинг"),
    ("Транспорт - Такси", "Транспорт"),
    ("Транспортировка", "Транспорт"),
    ("Развлечения - кино", "Развлечения"),
    ("Развлечения", "Развлечения"),
    ("Коммунальные услуги", "Подписки"),
    ("Индивидуальные сервис провайдеры", "Спорт"),
];

/// Map a bank category onto the budget taxonomy. Unknown categories map to "".
pub fn budget_category(bank_category: &str) -> &'static str {
    CATEGORY_MAP
        .iter()
        .find(|(bank, _)| *bank == bank_category)
        .map(|(_, budget)| *budget)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(budget_category("Магазины продуктовые"), "Продукты и заморозка");
        assert_eq!(budget_category("Ресторация / бары / кафе"), "Кафе и доставки");
        assert_eq!(budget_category("Транспортировка"), "Транспорт");
        assert_eq!(budget_category("Индивидуальные сервис провайдеры"), "Спорт");
        assert_eq!(budget_category("Коммунальные услуги"), "Подписки");
    }

    #[test]
    fn test_health_group() {
        for bank in ["Аптеки", "Медицинский сервис", "Поставщик  услуг"] {
            assert_eq!(budget_category(bank), "Здоровье");
        }
    }

    #[test]
    fn test_double_space_key_is_exact() {
        assert_eq!(budget_category("Поставщик услуг"), "");
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert_eq!(budget_category("Благотворительность"), "");
        assert_eq!(budget_category(""), "");
        assert_eq!(budget_category("прочее"), "");
    }

    #[test]
    fn test_map_has_unique_keys() {
        for (i, (bank, _)) in CATEGORY_MAP.iter().enumerate() {
            assert!(
                CATEGORY_MAP[i + 1..].iter().all(|(other, _)| other != bank),
                "duplicate key {bank:?}"
            );
        }
        assert_eq!(CATEGORY_MAP.len(), 14);
    }
}
