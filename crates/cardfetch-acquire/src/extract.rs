use cardfetch_model::CardEntry;
use scraper::{ElementRef, Html, Selector};

/// Card container on pkmncards.com listing pages.
pub const CARD_SELECTOR: &str = "article.type-pkmn_card";
/// Link inside a container; its `title` attribute names the card.
pub const LINK_SELECTOR: &str = "a.card-image-link";
/// Image inside a container; its `src` attribute is the image URL.
pub const IMAGE_SELECTOR: &str = "img.card-image";

/// A parsed listing page.
///
/// Cards are matched by class, never by position or text, so unrelated
/// markup changes elsewhere on the page do not affect extraction.
pub struct CardPage {
    document: Html,
    card: Selector,
    link: Selector,
    image: Selector,
}

impl CardPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
            card: Selector::parse(CARD_SELECTOR).expect("valid selector"),
            link: Selector::parse(LINK_SELECTOR).expect("valid selector"),
            image: Selector::parse(IMAGE_SELECTOR).expect("valid selector"),
        }
    }

    /// Number of card containers, complete or not.
    pub fn card_count(&self) -> usize {
        self.document.select(&self.card).count()
    }

    /// Entries in document order. Containers without a link title or an
    /// image source are skipped.
    pub fn entries(&self) -> impl Iterator<Item = CardEntry> + '_ {
        self.document
            .select(&self.card)
            .enumerate()
            .filter_map(move |(index, article)| {
                let entry = self.entry_from(article);
                if entry.is_none() {
                    tracing::debug!(card = index, "Skipping card without title or image source");
                }
                entry
            })
    }

    fn entry_from(&self, article: ElementRef<'_>) -> Option<CardEntry> {
        let title = article.select(&self.link).next()?.value().attr("title")?;
        let src = article.select(&self.image).next()?.value().attr("src")?;
        Some(CardEntry::new(title, src))
    }
}
