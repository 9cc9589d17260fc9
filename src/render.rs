use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::catalog::{ArtistPageData, PageData, QUERY_LIMIT};

const MEMBER_OPTIONS: [(&str, &str); 6] = [
    ("", "Any size"),
    ("1", "Solo"),
    ("2", "2 members"),
    ("3", "3 members"),
    ("4", "4 members"),
    ("5", "5+ members"),
];

/// Renders the listing, detail and error pages.
///
/// Built once in `main` and shared through the router state.
#[derive(Debug, Clone)]
pub struct Renderer {
    site_title: String,
    static_prefix: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new("Groupie Tracker", "/static")
    }
}

impl Renderer {
    pub fn new(site_title: impl Into<String>, static_prefix: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
            static_prefix: static_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn index(&self, page: &PageData) -> Markup {
        let body = html! {
            form.search method="get" action="/" {
                input type="search" name="q" value=(page.query)
                    maxlength=(QUERY_LIMIT - 1) placeholder="Search artists";
                select name="members" {
                    @for (value, label) in MEMBER_OPTIONS {
                        option value=(value) selected[page.members_filter == value] { (label) }
                    }
                }
                button type="submit" { "Search" }
            }

            p.summary { (result_summary(page.artists.len())) }

            @if page.artists.is_empty() {
                p.empty { "No artists match your search." }
            } @else {
                section.grid {
                    @for artist in &page.artists {
                        a.card href=(artist.detail_path()) {
                            img src=(artist.image) alt=(artist.name) loading="lazy";
                            h2 { (artist.name) }
                            p.first-album { "First album: " (artist.first_album) }
                            p.members { (join(&artist.members, ", ")) }
                            @let locations = page.locations_for(artist);
                            @if !locations.is_empty() {
                                p.locations { (join(locations, ", ")) }
                            }
                            @let dates = page.dates_for(artist);
                            @if !dates.is_empty() {
                                p.dates { (join(dates, ", ")) }
                            }
                            @let relations = page.relations_for(artist);
                            @if !relations.is_empty() {
                                p.relations { (join(relations, " | ")) }
                            }
                        }
                    }
                }
            }
        };

        self.layout(&self.site_title, body)
    }

    pub fn artist(&self, page: &ArtistPageData) -> Markup {
        let artist = &page.artist;
        let body = html! {
            article.artist {
                a.back href="/" { "← Back to artists" }
                img src=(artist.image) alt=(artist.name);
                h1 { (artist.name) }
                p.first-album { "First album: " (artist.first_album) }
                p.members { "Members: " (join(&artist.members, ", ")) }

                (section("Locations", &page.locations))
                (section("Dates", &page.dates))
                (section("Concerts", &page.relations))
            }
        };

        self.layout(&format!("{} | {}", artist.name, self.site_title), body)
    }

    pub fn error(&self, status: StatusCode, message: &str) -> Markup {
        let title = error_title(status);
        let body = html! {
            section.error {
                h1 { (title) }
                p.code { (status.as_u16()) }
                p.message { (message) }
                a href="/" { "Back to the home page" }
            }
        };

        self.layout(&title, body)
    }

    fn layout(&self, title: &str, body: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    link rel="stylesheet" href=(format!("{}/style.css", self.static_prefix));
                }
                body {
                    header { a.brand href="/" { (self.site_title) } }
                    main { (body) }
                }
            }
        }
    }
}

/// Template helper for ordered string lists.
pub fn join(items: &[String], separator: &str) -> String {
    items.join(separator)
}

pub fn error_title(status: StatusCode) -> String {
    match status {
        StatusCode::BAD_REQUEST => "400 — Bad Request".to_string(),
        StatusCode::NOT_FOUND => "404 — Not Found".to_string(),
        StatusCode::METHOD_NOT_ALLOWED => "405 — Method Not Allowed".to_string(),
        StatusCode::INTERNAL_SERVER_ERROR => "500 — Internal Server Error".to_string(),
        other => format!("Error {}", other.as_u16()),
    }
}

fn result_summary(count: usize) -> String {
    match count {
        1 => "1 artist".to_string(),
        n => format!("{n} artists"),
    }
}

fn section(heading: &str, items: &[String]) -> Markup {
    html! {
        section {
            h2 { (heading) }
            @if items.is_empty() {
                p.empty { "Nothing listed." }
            } @else {
                ul {
                    @for item in items {
                        li { (item) }
                    }
                }
            }
        }
    }
}
