use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::game::logic::GameState;
use crate::game::types::{Side, Status, TableRow};

const FALLBACK_LANG: &str = "en";

/// Bundled `.ftl` sources, keyed by language code.
const SOURCES: [(&str, &str); 2] = [
    ("en", include_str!("../../resources/en.ftl")),
    ("de", include_str!("../../resources/de.ftl")),
];

/// Fluent-based internationalization.
pub struct I18n {
    bundle: FluentBundle<FluentResource>,
    lang: String,
}

impl I18n {
    /// Pick `preferred` if given, otherwise the system language, falling back to English.
    pub fn load(preferred: Option<&str>) -> Self {
        let requested = preferred
            .map(str::to_string)
            .or_else(sys_locale::get_locale)
            .unwrap_or_else(|| FALLBACK_LANG.to_string())
            .to_lowercase();

        let lang_code = SOURCES
            .iter()
            .map(|(code, _)| *code)
            .find(|code| requested.starts_with(code))
            .unwrap_or(FALLBACK_LANG);
        debug!(requested = %requested, lang = lang_code, "selecting language");

        Self::for_language(lang_code)
    }

    /// Load the bundled translation for `lang`, or English if it is unknown or broken.
    pub fn for_language(lang: &str) -> Self {
        if let Some(i18n) = Self::try_load(lang) {
            return i18n;
        }
        warn!(lang, "no usable translation, falling back to {}", FALLBACK_LANG);
        if lang != FALLBACK_LANG {
            if let Some(i18n) = Self::try_load(FALLBACK_LANG) {
                return i18n;
            }
        }

        // Empty bundle; every lookup returns its message id.
        let langid = LanguageIdentifier::default();
        Self {
            bundle: FluentBundle::new(vec![langid]),
            lang: FALLBACK_LANG.to_string(),
        }
    }

    fn try_load(lang: &str) -> Option<Self> {
        let (_, source) = SOURCES.iter().find(|(code, _)| *code == lang)?;
        let resource = FluentResource::try_new(source.to_string()).ok()?;
        let langid: LanguageIdentifier = lang.parse().ok()?;
        let mut bundle = FluentBundle::new(vec![langid]);
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).ok()?;
        Some(Self {
            bundle,
            lang: lang.to_string(),
        })
    }

    /// Get a translated message by its identifier.
    pub fn t(&self, id: &str) -> String {
        self.format(id, None)
    }

    /// Get a translated message with arguments.
    pub fn t_args(&self, id: &str, args: &FluentArgs) -> String {
        self.format(id, Some(args))
    }

    pub fn status(&self, status: &Status) -> String {
        match status.message() {
            (id, Some(margin)) => {
                let mut args = FluentArgs::new();
                args.set("margin", margin);
                self.t_args(id, &args)
            }
            (id, None) => self.t(id),
        }
    }

    pub fn action(&self, game: &GameState) -> String {
        self.t(game.action_message_id())
    }

    pub fn side(&self, side: Side) -> String {
        self.t(side.message_id())
    }

    /// Text of the Info dialog: rules, version and the current status line.
    pub fn info_body(&self, version: &str, game: &GameState) -> String {
        let mut args = FluentArgs::new();
        args.set("version", version);
        args.set("status", self.status(&game.status()));
        // Fluent keeps "\n" escapes literally
        self.t_args("info-body", &args).replace("\\n", "\n")
    }

    /// Display cells of a table row, with header and footer labels translated.
    pub fn row_cells(&self, row: &TableRow) -> [String; 4] {
        let mut cells = row.cells();
        match row {
            TableRow::Header => {
                let ids = ["table-quarter", "table-threes", "table-twos", "table-total"];
                for (cell, id) in cells.iter_mut().zip(ids) {
                    *cell = self.t(id);
                }
            }
            TableRow::Footer { .. } => cells[0] = self.t("table-score"),
            TableRow::Quarter { .. } => {}
        }
        cells
    }

    fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        let msg = match self.bundle.get_message(id) {
            Some(m) => m,
            None => return id.to_string(),
        };
        let pattern = match msg.value() {
            Some(p) => p,
            None => return id.to_string(),
        };
        let mut errors = vec![];
        let text = self
            .bundle
            .format_pattern(pattern, args, &mut errors)
            .to_string();
        if !errors.is_empty() {
            warn!(id, ?errors, "message formatted with errors");
        }
        text
    }

    pub fn current_language(&self) -> &str {
        &self.lang
    }
}
