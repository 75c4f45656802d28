use crate::i18n::{Language, Translations};
use comfy_table::{presets::UTF8_FULL, Table};

pub fn list_languages(translations: &Translations, current: Language) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Tag", "Language", "Title", ""]);

    for language in Language::ALL {
        let messages = translations.messages(language);
        table.add_row(vec![
            language.tag(),
            language.native_name(),
            messages.text("main_title"),
            if language == current { "*" } else { "" },
        ]);
    }

    println!("{}", table);
}
