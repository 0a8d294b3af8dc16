//! Section builders for the project detail view.
//!
//! Each builder is a pure function of the section context returning
//! `Some(fragment)` when its governing field is present and non-empty,
//! `None` otherwise. `detail_sections` composes them in the fixed display
//! order by filtering out the empty results.

use yew::prelude::*;

use crate::artists::{artist_name, artist_tag, collaboration};
use crate::data::{cache_busted, ArtistLinkMap, Collection, CollectionRow, ProjectRecord};

pub struct SectionCtx<'a> {
    pub record: &'a ProjectRecord,
    pub links: &'a ArtistLinkMap,
    pub cache_stamp: u64,
    /// Receives the gallery-wide image index (hero first, then grid order).
    pub on_image_click: Callback<usize>,
}

type SectionBuilder = for<'a> fn(&SectionCtx<'a>) -> Option<Html>;

const SECTION_ORDER: [SectionBuilder; 24] = [
    header,
    description,
    external_link,
    press,
    watch_links,
    exhibition_link,
    gallery,
    collection,
    ai_collection,
    japanese_contemporary,
    curated_collection,
    artists,
    exhibitions,
    opening_artists,
    solo_shows,
    opening_reception,
    colorforms,
    artist_in_residence,
    music,
    partners,
    educational,
    notes,
    highlights,
    crypto_citizens,
];

pub fn detail_sections(ctx: &SectionCtx<'_>) -> Vec<Html> {
    SECTION_ORDER.iter().filter_map(|build| build(ctx)).collect()
}

fn header(ctx: &SectionCtx<'_>) -> Option<Html> {
    let p = ctx.record;
    let principle = p
        .organizing_principle
        .as_ref()
        .map(|principle| html! { <span class="detail-principle">{ format!("\"{principle}\"") }</span> });
    let date = p.date_range.as_deref().or(p.year.as_deref()).unwrap_or("");
    let venue = p
        .venue
        .as_ref()
        .map(|venue| html! { <p class="detail-venue">{ venue }</p> });
    let location = p
        .location
        .as_ref()
        .filter(|location| p.venue.as_deref() != Some(location.as_str()))
        .map(|location| html! { <p class="detail-location">{ location }</p> });
    Some(html! {
        <div class="detail-header">
            <div class="detail-breadcrumb">
                <span class="detail-org">{ &p.organization }</span>
                { principle }
            </div>
            <h1 class="detail-title">{ &p.title }</h1>
            <div class="detail-meta">
                <span class="detail-role">{ p.role.as_deref().unwrap_or("") }</span>
                <span class="detail-separator">{ "·" }</span>
                <span class="detail-date">{ date }</span>
            </div>
            { venue }
            { location }
        </div>
    })
}

fn description(ctx: &SectionCtx<'_>) -> Option<Html> {
    let paragraphs = ctx.record.description_paragraphs();
    if paragraphs.is_empty() {
        return None;
    }
    Some(html! {
        <div class="detail-description">
            { for paragraphs.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
        </div>
    })
}

fn external_link(ctx: &SectionCtx<'_>) -> Option<Html> {
    let link = ctx.record.link.as_ref()?;
    let publication = ctx.record.publication.as_deref().unwrap_or("External Site");
    let href = link.clone();
    Some(html! {
        <div class="detail-section">
            <a class="external-link" href={href} target="_blank">
                { format!("Read on {publication} →") }
            </a>
        </div>
    })
}

fn press(ctx: &SectionCtx<'_>) -> Option<Html> {
    let items = &ctx.record.press;
    if items.is_empty() {
        return None;
    }
    Some(html! {
        <div class="detail-section">
            <h3 class="section-heading">{ "Press" }</h3>
            <div class="press-list">
                { for items.iter().map(|item| {
                    let href = item.link.clone().unwrap_or_else(|| "#".to_string());
                    let target = item
                        .link
                        .as_deref()
                        .filter(|link| *link != "#")
                        .map(|_| "_blank");
                    html! {
                        <a class="press-item" href={href} target={target}>
                            <span class="press-publication">{ &item.publication }</span>
                            <span class="press-title">{ &item.title }</span>
                        </a>
                    }
                }) }
            </div>
        </div>
    })
}

fn watch_links(ctx: &SectionCtx<'_>) -> Option<Html> {
    let links = &ctx.record.links;
    if links.is_empty() {
        return None;
    }
    Some(html! {
        <div class="detail-section">
            <h3 class="section-heading">{ "Watch" }</h3>
            <div class="press-list">
                { for links.iter().map(|link| {
                    let href = link.url.clone();
                    html! {
                        <a class="press-item" href={href} target="_blank">
                            <span class="press-publication">{ "YouTube" }</span>
                            <span class="press-title">{ &link.title }</span>
                        </a>
                    }
                }) }
            </div>
        </div>
    })
}

fn exhibition_link(ctx: &SectionCtx<'_>) -> Option<Html> {
    let link = ctx.record.exhibition_link.as_ref()?;
    let href = link.clone();
    Some(html! {
        <div class="detail-section">
            <a class="external-link" href={href} target="_blank">
                { "View Exhibition →" }
            </a>
        </div>
    })
}

fn gallery(ctx: &SectionCtx<'_>) -> Option<Html> {
    let p = ctx.record;
    let cover = p.cover();
    if cover.is_none() && p.videos.is_empty() && p.images.is_empty() {
        return Some(html! {
            <div class="detail-gallery">
                <div class="gallery-placeholder">
                    <span>{ "Images coming soon" }</span>
                </div>
            </div>
        });
    }

    let mut slot = 0usize;
    let hero = cover.map(|src| {
        let url = cache_busted(src, ctx.cache_stamp);
        let index = slot;
        slot += 1;
        let open = ctx.on_image_click.clone();
        let onclick = Callback::from(move |_: MouseEvent| open.emit(index));
        html! { <img class="detail-hero" src={url} alt={p.title.clone()} {onclick} /> }
    });
    let videos = p.videos.iter().map(|video| {
        let src = format!("https://www.youtube.com/embed/{}", video.youtube_id);
        html! {
            <div class="video-embed">
                <iframe src={src} title={video.title.clone()} frameborder="0" allowfullscreen=true></iframe>
            </div>
        }
    });
    let images: Vec<Html> = p
        .images
        .iter()
        .map(|src| {
            let url = cache_busted(src, ctx.cache_stamp);
            let index = slot;
            slot += 1;
            let open = ctx.on_image_click.clone();
            let onclick = Callback::from(move |_: MouseEvent| open.emit(index));
            html! { <img class="gallery-image" src={url} alt={p.title.clone()} {onclick} /> }
        })
        .collect();
    let grid = (!images.is_empty()).then(|| {
        html! { <div class="gallery-grid">{ for images.into_iter() }</div> }
    });
    Some(html! {
        <div class="detail-gallery">
            { hero }
            { for videos }
            { grid }
        </div>
    })
}

fn collection(ctx: &SectionCtx<'_>) -> Option<Html> {
    match ctx.record.collection.as_ref()? {
        Collection::Named { title, artists } => Some(html! {
            <div class="detail-section">
                <h3 class="section-heading">{ title }</h3>
                <div class="artist-list">
                    { for artists.iter().map(|name| artist_tag(ctx.links, name)) }
                </div>
            </div>
        }),
        Collection::Rows(rows) => Some(html! {
            <div class="detail-section">
                <h3 class="section-heading">{ "Collection" }</h3>
                <div class="collection-list">
                    { for rows
                        .iter()
                        .enumerate()
                        .map(|(index, row)| collection_item(ctx.links, row, Some(index + 1))) }
                </div>
            </div>
        }),
    }
}

fn collection_item(links: &ArtistLinkMap, row: &CollectionRow, ordinal: Option<usize>) -> Html {
    let number = ordinal.map(|n| html! { <span class="collection-number">{ n }</span> });
    let title = row
        .title
        .as_ref()
        .map(|title| html! { <span class="collection-work">{ title }</span> });
    let note = row
        .note
        .as_ref()
        .map(|note| html! { <span class="collection-note">{ note }</span> });
    html! {
        <div class="collection-item">
            { number }
            { title }
            <span class="collection-artist">{ artist_name(links, &row.artist) }</span>
            { note }
        </div>
    }
}

fn tag_section(links: &ArtistLinkMap, heading: &str, names: &[String]) -> Option<Html> {
    if names.is_empty() {
        return None;
    }
    Some(html! {
        <div class="detail-section">
            <h3 class="section-heading">{ heading }</h3>
            <div class="artist-list">
                { for names.iter().map(|name| artist_tag(links, name)) }
            </div>
        </div>
    })
}

fn row_section(links: &ArtistLinkMap, heading: &str, rows: &[CollectionRow]) -> Option<Html> {
    if rows.is_empty() {
        return None;
    }
    Some(html! {
        <div class="detail-section">
            <h3 class="section-heading">{ heading }</h3>
            <div class="collection-list">
                { for rows.iter().map(|row| collection_item(links, row, None)) }
            </div>
        </div>
    })
}

fn ai_collection(ctx: &SectionCtx<'_>) -> Option<Html> {
    tag_section(ctx.links, "AI Collection", &ctx.record.ai_collection)
}

fn japanese_contemporary(ctx: &SectionCtx<'_>) -> Option<Html> {
    row_section(
        ctx.links,
        "Japanese Contemporary Collection",
        &ctx.record.japanese_contemporary_collection,
    )
}

fn curated_collection(ctx: &SectionCtx<'_>) -> Option<Html> {
    tag_section(ctx.links, "Curated Collection", &ctx.record.curated_collection)
}

fn artists(ctx: &SectionCtx<'_>) -> Option<Html> {
    let p = ctx.record;
    // A collection section supersedes the plain artist list.
    if p.collection.is_some() {
        return None;
    }
    let heading = if p.artists.len() == 1 { "Artist" } else { "Artists" };
    tag_section(ctx.links, heading, &p.artists)
}

fn exhibitions(ctx: &SectionCtx<'_>) -> Option<Html> {
    let rows = &ctx.record.exhibitions;
    if rows.is_empty() {
        return None;
    }
    Some(html! {
        <div class="detail-section">
            <h3 class="section-heading">{ "Exhibitions" }</h3>
            <div class="collection-list">
                { for rows.iter().map(|row| {
                    let artist = row.artist_label().map(|name| {
                        html! { <span class="collection-artist">{ artist_name(ctx.links, name) }</span> }
                    });
                    let note = row
                        .note
                        .as_ref()
                        .map(|note| html! { <span class="collection-note">{ note }</span> });
                    html! {
                        <div class="collection-item">
                            <span class="collection-work">{ &row.title }</span>
                            { artist }
                            { note }
                        </div>
                    }
                }) }
            </div>
        </div>
    })
}

fn opening_artists(ctx: &SectionCtx<'_>) -> Option<Html> {
    tag_section(ctx.links, "Opening Exhibition", &ctx.record.opening_artists)
}

fn solo_shows(ctx: &SectionCtx<'_>) -> Option<Html> {
    let shows = &ctx.record.solo_shows;
    if shows.is_empty() {
        return None;
    }
    Some(html! {
        <div class="detail-section">
            <h3 class="section-heading">{ "Solo Shows" }</h3>
            <div class="artist-list">
                { for shows.iter().map(|show| {
                    html! { <span class="artist-tag">{ collaboration(ctx.links, show) }</span> }
                }) }
            </div>
        </div>
    })
}

fn opening_reception(ctx: &SectionCtx<'_>) -> Option<Html> {
    row_section(
        ctx.links,
        "Opening Reception",
        &ctx.record.opening_reception_mints,
    )
}

fn colorforms(ctx: &SectionCtx<'_>) -> Option<Html> {
    let forms = &ctx.record.colorforms;
    if forms.is_empty() {
        return None;
    }
    Some(html! {
        <div class="detail-section">
            <h3 class="section-heading">{ "Colorforms" }</h3>
            <div class="colorforms-grid">
                { for forms.iter().map(|colorform| html! {
                    <div class="colorform-item">
                        <span class="colorform-form">{ &colorform.form }</span>
                        <span class="colorform-city">{ &colorform.city }</span>
                    </div>
                }) }
            </div>
        </div>
    })
}

fn artist_in_residence(ctx: &SectionCtx<'_>) -> Option<Html> {
    let residency = ctx.record.artist_in_residence.as_ref()?;
    Some(html! {
        <div class="detail-section">
            <h3 class="section-heading">{ "Artist in Residence" }</h3>
            <div class="collection-item">
                <span class="collection-work">{ &residency.title }</span>
                <span class="collection-artist">{ artist_name(ctx.links, &residency.artist) }</span>
            </div>
        </div>
    })
}

fn music(ctx: &SectionCtx<'_>) -> Option<Html> {
    tag_section(ctx.links, "Music", &ctx.record.music)
}

fn partners(ctx: &SectionCtx<'_>) -> Option<Html> {
    tag_section(ctx.links, "Partners", &ctx.record.partners)
}

fn educational(ctx: &SectionCtx<'_>) -> Option<Html> {
    let text = ctx.record.educational.as_ref()?;
    Some(text_section("Educational Programming", text))
}

fn notes(ctx: &SectionCtx<'_>) -> Option<Html> {
    let text = ctx.record.additional_notes.as_ref()?;
    Some(text_section("Notes", text))
}

fn text_section(heading: &str, text: &str) -> Html {
    html! {
        <div class="detail-section">
            <h3 class="section-heading">{ heading }</h3>
            <p class="detail-text">{ text }</p>
        </div>
    }
}

fn highlights(ctx: &SectionCtx<'_>) -> Option<Html> {
    let items = &ctx.record.key_highlights;
    if items.is_empty() {
        return None;
    }
    Some(html! {
        <div class="detail-section">
            <h3 class="section-heading">{ "Highlights" }</h3>
            <ul class="highlights-list">
                { for items.iter().map(|item| html! { <li>{ item }</li> }) }
            </ul>
        </div>
    })
}

fn crypto_citizens(ctx: &SectionCtx<'_>) -> Option<Html> {
    let name = ctx.record.crypto_citizens.as_ref()?;
    Some(html! {
        <div class="detail-citizens">
            <span class="citizens-label">{ "CryptoCitizens" }</span>
            <span class="citizens-name">{ name }</span>
        </div>
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Collection, ProjectRecord};

    fn ctx_parts() -> (ArtistLinkMap, Callback<usize>) {
        let mut links = ArtistLinkMap::new();
        links.insert("X".to_string(), "https://x.example".to_string());
        (links, Callback::noop())
    }

    fn ctx<'a>(
        record: &'a ProjectRecord,
        links: &'a ArtistLinkMap,
        click: &Callback<usize>,
    ) -> SectionCtx<'a> {
        SectionCtx {
            record,
            links,
            cache_stamp: 7,
            on_image_click: click.clone(),
        }
    }

    fn bare_record() -> ProjectRecord {
        ProjectRecord {
            id: 1,
            title: "Show".to_string(),
            category: "Exhibition".to_string(),
            organization: "AUTOMATA".to_string(),
            ..ProjectRecord::default()
        }
    }

    #[test]
    fn bare_record_renders_only_header_and_gallery_placeholder() {
        let record = bare_record();
        let (links, click) = ctx_parts();
        let ctx = ctx(&record, &links, &click);
        let sections = detail_sections(&ctx);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], header(&ctx).unwrap());
        assert_eq!(sections[1], gallery(&ctx).unwrap());
    }

    #[test]
    fn detail_output_is_idempotent() {
        let mut record = bare_record();
        record.partners = vec!["X".to_string(), "Y".to_string()];
        record.key_highlights = vec!["Sold out".to_string()];
        record.additional_notes = Some("Note".to_string());
        let (links, click) = ctx_parts();
        let ctx = ctx(&record, &links, &click);
        assert_eq!(detail_sections(&ctx), detail_sections(&ctx));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let mut record = bare_record();
        record.full_description = Some("One.\n\nTwo.".to_string());
        record.partners = vec!["P".to_string()];
        record.music = vec!["M".to_string()];
        record.key_highlights = vec!["H".to_string()];
        record.crypto_citizens = Some("CryptoTokyoites".to_string());
        record.solo_shows = vec!["A x B".to_string()];
        let (links, click) = ctx_parts();
        let ctx = ctx(&record, &links, &click);
        let sections = detail_sections(&ctx);
        let expected = vec![
            header(&ctx).unwrap(),
            description(&ctx).unwrap(),
            gallery(&ctx).unwrap(),
            solo_shows(&ctx).unwrap(),
            music(&ctx).unwrap(),
            partners(&ctx).unwrap(),
            highlights(&ctx).unwrap(),
            crypto_citizens(&ctx).unwrap(),
        ];
        assert_eq!(sections, expected);
    }

    #[test]
    fn absent_fields_leave_no_trace() {
        let record = bare_record();
        let (links, click) = ctx_parts();
        let ctx = ctx(&record, &links, &click);
        assert!(description(&ctx).is_none());
        assert!(press(&ctx).is_none());
        assert!(watch_links(&ctx).is_none());
        assert!(external_link(&ctx).is_none());
        assert!(exhibition_link(&ctx).is_none());
        assert!(collection(&ctx).is_none());
        assert!(artists(&ctx).is_none());
        assert!(exhibitions(&ctx).is_none());
        assert!(opening_artists(&ctx).is_none());
        assert!(solo_shows(&ctx).is_none());
        assert!(opening_reception(&ctx).is_none());
        assert!(colorforms(&ctx).is_none());
        assert!(artist_in_residence(&ctx).is_none());
        assert!(music(&ctx).is_none());
        assert!(partners(&ctx).is_none());
        assert!(educational(&ctx).is_none());
        assert!(notes(&ctx).is_none());
        assert!(highlights(&ctx).is_none());
        assert!(crypto_citizens(&ctx).is_none());
    }

    #[test]
    fn named_collection_renders_group_with_resolved_links() {
        let mut record = bare_record();
        record.collection = Some(Collection::Named {
            title: "Featured".to_string(),
            artists: vec!["X".to_string(), "Y".to_string()],
        });
        let (links, click) = ctx_parts();
        let ctx = ctx(&record, &links, &click);
        let expected = html! {
            <div class="detail-section">
                <h3 class="section-heading">{ "Featured" }</h3>
                <div class="artist-list">
                    { for ["X", "Y"].iter().map(|name| artist_tag(&links, name)) }
                </div>
            </div>
        };
        assert_eq!(collection(&ctx).unwrap(), expected);
    }

    #[test]
    fn collection_rows_are_numbered_from_one() {
        let mut record = bare_record();
        record.collection = Some(Collection::Rows(vec![
            CollectionRow {
                title: Some("Work".to_string()),
                artist: "X".to_string(),
                note: None,
            },
            CollectionRow {
                title: None,
                artist: "Y".to_string(),
                note: Some("AP".to_string()),
            },
        ]));
        let (links, click) = ctx_parts();
        let ctx = ctx(&record, &links, &click);
        let Collection::Rows(rows) = record.collection.as_ref().unwrap() else {
            unreachable!()
        };
        let expected = html! {
            <div class="detail-section">
                <h3 class="section-heading">{ "Collection" }</h3>
                <div class="collection-list">
                    { for rows
                        .iter()
                        .enumerate()
                        .map(|(index, row)| collection_item(&links, row, Some(index + 1))) }
                </div>
            </div>
        };
        assert_eq!(collection(&ctx).unwrap(), expected);
    }

    #[test]
    fn plain_artists_suppressed_when_collection_present() {
        let mut record = bare_record();
        record.artists = vec!["X".to_string()];
        record.collection = Some(Collection::Rows(vec![CollectionRow {
            title: None,
            artist: "Y".to_string(),
            note: None,
        }]));
        let (links, click) = ctx_parts();
        let ctx = ctx(&record, &links, &click);
        assert!(artists(&ctx).is_none());
    }

    #[test]
    fn artists_heading_is_singular_for_one_entry() {
        let mut record = bare_record();
        record.artists = vec!["X".to_string()];
        let (links, click) = ctx_parts();
        let ctx = ctx(&record, &links, &click);
        let expected = tag_section(&links, "Artist", &record.artists).unwrap();
        assert_eq!(artists(&ctx).unwrap(), expected);

        let mut record = bare_record();
        record.artists = vec!["X".to_string(), "Y".to_string()];
        let ctx = SectionCtx {
            record: &record,
            links: &links,
            cache_stamp: 7,
            on_image_click: click.clone(),
        };
        let expected = tag_section(&links, "Artists", &record.artists).unwrap();
        assert_eq!(artists(&ctx).unwrap(), expected);
    }

    #[test]
    fn gallery_placeholder_only_without_media() {
        let record = bare_record();
        let (links, click) = ctx_parts();
        let ctx = ctx(&record, &links, &click);
        let expected = html! {
            <div class="detail-gallery">
                <div class="gallery-placeholder">
                    <span>{ "Images coming soon" }</span>
                </div>
            </div>
        };
        assert_eq!(gallery(&ctx).unwrap(), expected);
    }

    #[test]
    fn gallery_renders_video_embeds() {
        let mut record = bare_record();
        record.videos = vec![crate::data::Video {
            youtube_id: "dQw4w9WgXcQ".to_string(),
            title: "Opening night recap".to_string(),
        }];
        let (links, click) = ctx_parts();
        let ctx = ctx(&record, &links, &click);
        let hero: Option<Html> = None;
        let grid: Option<Html> = None;
        let videos = record.videos.iter().map(|video| {
            let src = format!("https://www.youtube.com/embed/{}", video.youtube_id);
            html! {
                <div class="video-embed">
                    <iframe src={src} title={video.title.clone()} frameborder="0" allowfullscreen=true></iframe>
                </div>
            }
        });
        let expected = html! {
            <div class="detail-gallery">
                { hero }
                { for videos }
                { grid }
            </div>
        };
        assert_eq!(gallery(&ctx).unwrap(), expected);
    }

    #[test]
    fn gallery_with_media_skips_the_placeholder() {
        let mut record = bare_record();
        record.cover_image = Some("img/cover.jpg".to_string());
        record.images = vec!["img/a.jpg".to_string()];
        let (links, click) = ctx_parts();
        let ctx = ctx(&record, &links, &click);
        let placeholder = html! {
            <div class="detail-gallery">
                <div class="gallery-placeholder">
                    <span>{ "Images coming soon" }</span>
                </div>
            </div>
        };
        assert_ne!(gallery(&ctx).unwrap(), placeholder);
    }
}
