//! Localized navigation labels.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLabels {
    pub index: &'static str,
    pub about: &'static str,
    pub rss: &'static str,
    pub search: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub nav: NavLabels,
}

const EN_US: Locale = Locale {
    nav: NavLabels {
        index: "Blog",
        about: "About",
        rss: "RSS",
        search: "Search",
    },
};

const ZH_CN: Locale = Locale {
    nav: NavLabels {
        index: "博客",
        about: "关于",
        rss: "订阅",
        search: "搜索",
    },
};

const ZH_TW: Locale = Locale {
    nav: NavLabels {
        index: "部落格",
        about: "關於",
        rss: "訂閱",
        search: "搜尋",
    },
};

const JA_JP: Locale = Locale {
    nav: NavLabels {
        index: "ブログ",
        about: "について",
        rss: "RSS",
        search: "検索",
    },
};

const FR_FR: Locale = Locale {
    nav: NavLabels {
        index: "Blog",
        about: "À propos",
        rss: "RSS",
        search: "Rechercher",
    },
};

const ES_ES: Locale = Locale {
    nav: NavLabels {
        index: "Blog",
        about: "Acerca de",
        rss: "RSS",
        search: "Buscar",
    },
};

impl Default for Locale {
    fn default() -> Self {
        EN_US
    }
}

impl Locale {
    /// Looks up labels for a language tag such as `zh-TW` or `fr`.
    ///
    /// The full tag wins; otherwise the primary subtag picks the first table for
    /// that language. Unknown languages get English.
    #[must_use]
    pub fn for_lang(lang: &str) -> Self {
        let tag = lang.trim().replace('_', "-").to_ascii_lowercase();
        match tag.as_str() {
            "zh-tw" | "zh-hk" | "zh-hant" => return ZH_TW,
            "zh-cn" | "zh-sg" | "zh-hans" => return ZH_CN,
            _ => {}
        }
        match tag.split('-').next().unwrap_or_default() {
            "zh" => ZH_CN,
            "ja" => JA_JP,
            "fr" => FR_FR,
            "es" => ES_ES,
            _ => EN_US,
        }
    }
}
