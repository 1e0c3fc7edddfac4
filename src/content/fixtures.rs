//! Shared sample content for unit tests.

use crate::content::{
    Bilingual, EntryIds, FunctionItem, FunctionsEntry, HelpTree, MainEntry, NewsEntry, Paragraph,
    TextItem, TipsEntry,
};
use std::collections::BTreeMap;
use std::sync::Arc;

fn ids(key: &str) -> EntryIds {
    let (page, sub_page) = key.split_once('_').unwrap_or((key, ""));
    EntryIds {
        id: key.to_string(),
        page_id: page.to_string(),
        sub_page_id: sub_page.to_string(),
    }
}

fn function(id: &str, cz_title: &str, en_title: &str, cz: &[&str], en: &[&str]) -> FunctionItem {
    FunctionItem {
        id: id.to_string(),
        title: Bilingual::new(cz_title.to_string(), en_title.to_string()),
        body: Bilingual::new(
            cz.iter().map(|t| Paragraph::new(*t)).collect(),
            en.iter().map(|t| Paragraph::new(*t)).collect(),
        ),
    }
}

fn collection<T>(entries: Vec<(&str, T)>) -> Arc<BTreeMap<String, Arc<T>>> {
    Arc::new(
        entries
            .into_iter()
            .map(|(key, entry)| (key.to_string(), Arc::new(entry)))
            .collect(),
    )
}

/// Sample tree modelled on the players pages.
///
/// - `players_tabs` functions: five items with ids `"0"..="4"`
/// - `players_tabs` tips: three items per language
/// - `players_tabs` news: three Czech items, no English items
/// - `players_tabs` opening text: Czech only
pub fn sample_tree() -> HelpTree {
    let main = collection(vec![
        (
            "players_tabs",
            MainEntry {
                ids: ids("players_tabs"),
                texts: Bilingual::new(
                    Some(TextItem::new(
                        "Hráči - Tabulky",
                        "Tabulky s daty jsou základem <b>Hockey Logic</b>.",
                    )),
                    None,
                ),
            },
        ),
        (
            "players_gamelog",
            MainEntry {
                ids: ids("players_gamelog"),
                texts: Bilingual::new(
                    Some(TextItem::new("Hráči - Gamelog", "Odehrané zápasy.")),
                    Some(TextItem::new("Players - Gamelog", "Games played.")),
                ),
            },
        ),
    ]);

    let tips = collection(vec![(
        "players_tabs",
        TipsEntry {
            ids: ids("players_tabs"),
            items: Bilingual::new(
                vec![
                    TextItem::new("Srovnejte hráče", "Tlačítko <b>Ligový percentil</b>."),
                    TextItem::new("Karta hráče", "<b>Přehled</b> na kartě."),
                    TextItem::new("Spusťte video", "Ikonka <b>lupy</b>."),
                ],
                vec![
                    TextItem::new("Compare players", "The <b>League percentile</b> button."),
                    TextItem::new("Player card", "<b>Overview</b> on the card."),
                    TextItem::new("Start a video", "The <b>magnifier</b> icon."),
                ],
            ),
        },
    )]);

    let functions = collection(vec![
        (
            "players_tabs",
            FunctionsEntry {
                ids: ids("players_tabs"),
                items: vec![
                    function(
                        "0",
                        "Ligový percentil",
                        "League percentile",
                        &[
                            "Stisknutím tlačítka <b>Ligový percentil</b> se zobrazí percentil.",
                            "<b>Příklad</b>: percentil 83.",
                        ],
                        &["Press <b>League percentile</b>."],
                    ),
                    function(
                        "1",
                        "Filtrovat pozice",
                        "",
                        &["Hráče lze omezit na <b>útočníky</b>."],
                        &[],
                    ),
                    function(
                        "2",
                        "Vybrat vlastní data",
                        "",
                        &[
                            "Tlačítko <b>Vybrat vlastní data</b> otevře stránku.",
                            "Potvrďte tlačítkem <b>Nahrát data</b>.",
                        ],
                        &[],
                    ),
                    function("3", "Lupa", "", &["Najetím na <b>ikonku lupy</b>."], &[]),
                    function(
                        "4",
                        "Více filtrů",
                        "",
                        &[
                            "Kromě <b>základních filtrů</b> jsou další.",
                            "Nová data zobrazíte tlačítkem <b>Nahrát data</b>.",
                        ],
                        &[],
                    ),
                ],
            },
        ),
        (
            "players_gamelog",
            FunctionsEntry {
                ids: ids("players_gamelog"),
                items: vec![
                    function("0", "Vybrat vlastní data", "", &["Tlačítko."], &[]),
                    function("1", "Datové šablony", "", &["<b>Šablony</b>."], &[]),
                ],
            },
        ),
        (
            "players_trend",
            FunctionsEntry {
                ids: ids("players_trend"),
                items: Vec::new(),
            },
        ),
        (
            "formations_pairs",
            FunctionsEntry {
                ids: ids("formations_pairs"),
                items: vec![function("0", "Dvojice", "", &["Obránci."], &[])],
            },
        ),
    ]);

    let news = collection(vec![(
        "players_tabs",
        NewsEntry {
            ids: ids("players_tabs"),
            show: true,
            title: Bilingual::new("Novinky na stránce Hráči - Tabulky".to_string(), String::new()),
            items: Bilingual::new(
                vec![
                    TextItem::new("Souhrnný percentil", "Přidali jsme <b>souhrnný percentil</b>."),
                    TextItem::new("Nápověda", "Ke každé stránce jsme přidali <b>Nápovědu</b>."),
                    TextItem::new("Datové šablony", "Připravili jsme <b>šablony</b>."),
                ],
                Vec::new(),
            ),
        },
    )]);

    HelpTree {
        main,
        tips,
        functions,
        news,
    }
}
