use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ko" => Ok(Locale::Ko),
            other => Err(format!("unsupported locale `{other}`, expected `en` or `ko`")),
        }
    }
}

impl Locale {
    /// Value of the `lang` attribute on the page layout.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }
}

/// Every page the site renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Demo1Info,
    Demo1,
    Demo2Info,
    Demo2,
    Demo3Info,
    Demo3,
    EdgeServices,
    NotFound,
    ServerError,
}

impl Page {
    pub fn title(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Page::Landing => "Bot Trapper Demo",
                Page::Demo1Info => "Bot Demo 1 Description",
                Page::Demo1 => "Bot Demo 1",
                Page::Demo2Info => "Bot Demo 2 Description",
                Page::Demo2 => "Bot Demo 2",
                Page::Demo3Info => "Bot Demo 3 Description",
                Page::Demo3 => "Bot Demo 3: Flight Pricing",
                Page::EdgeServices => "AWS Edge Services",
                Page::NotFound => "Page Not Found",
                Page::ServerError => "Server Error",
            },
            Locale::Ko => match self {
                Page::Landing => "Bot Trapper Demo",
                Page::Demo1Info => "봇 데모 1 설명",
                Page::Demo1 => "봇 데모 1",
                Page::Demo2Info => "봇 데모 2 설명",
                Page::Demo2 => "봇 데모 2",
                Page::Demo3Info => "봇 데모 3 설명",
                Page::Demo3 => "봇 데모 3: 항공권 가격",
                Page::EdgeServices => "AWS 엣지 서비스",
                Page::NotFound => "페이지를 찾을 수 없습니다",
                Page::ServerError => "서버 오류",
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" KO ".parse::<Locale>(), Ok(Locale::Ko));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_titles_are_localized() {
        assert_eq!(Page::Demo2.title(Locale::En), "Bot Demo 2");
        assert_eq!(Page::Demo2.title(Locale::Ko), "봇 데모 2");
        assert_eq!(Page::NotFound.title(Locale::Ko), "페이지를 찾을 수 없습니다");
    }
}
