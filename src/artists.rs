use yew::prelude::*;

use crate::data::ArtistLinkMap;

/// Every artist name rendered anywhere goes through this lookup: a name in
/// the link map becomes an outbound hyperlink, anything else plain text.
pub fn artist_name(links: &ArtistLinkMap, name: &str) -> Html {
    match links.get(name) {
        Some(url) => {
            let href = url.clone();
            html! {
                <a class="artist-link" href={href} target="_blank" rel="noopener noreferrer">
                    { name }
                </a>
            }
        }
        None => html! { <span class="artist-name">{ name }</span> },
    }
}

pub fn artist_tag(links: &ArtistLinkMap, name: &str) -> Html {
    html! { <span class="artist-tag">{ artist_name(links, name) }</span> }
}

/// Solo shows may pair artists as "A x B"; each side resolves its link
/// independently.
pub fn collaboration(links: &ArtistLinkMap, show: &str) -> Html {
    let mut parts = Vec::new();
    for (index, side) in show.split(" x ").enumerate() {
        if index > 0 {
            parts.push(html! { <span class="collab-separator">{ " x " }</span> });
        }
        parts.push(artist_name(links, side.trim()));
    }
    html! { <>{ for parts.into_iter() }</> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> ArtistLinkMap {
        let mut map = ArtistLinkMap::new();
        map.insert("X".to_string(), "https://x.example".to_string());
        map
    }

    #[test]
    fn mapped_name_renders_as_hyperlink() {
        let href = "https://x.example".to_string();
        let expected = html! {
            <a class="artist-link" href={href} target="_blank" rel="noopener noreferrer">
                { "X" }
            </a>
        };
        assert_eq!(artist_name(&links(), "X"), expected);
    }

    #[test]
    fn unmapped_name_renders_as_plain_text() {
        let expected = html! { <span class="artist-name">{ "Y" }</span> };
        assert_eq!(artist_name(&links(), "Y"), expected);
    }

    #[test]
    fn collaboration_resolves_each_side_independently() {
        let links = links();
        let parts = vec![
            artist_name(&links, "X"),
            html! { <span class="collab-separator">{ " x " }</span> },
            artist_name(&links, "Y"),
        ];
        let expected = html! { <>{ for parts.into_iter() }</> };
        assert_eq!(collaboration(&links, "X x Y"), expected);
    }

    #[test]
    fn single_name_show_has_no_separator() {
        let links = links();
        let parts = vec![artist_name(&links, "Solo")];
        let expected = html! { <>{ for parts.into_iter() }</> };
        assert_eq!(collaboration(&links, "Solo"), expected);
    }
}
