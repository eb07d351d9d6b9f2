use api::BlogPost;
use crud::PageState;
use dioxus::prelude::*;

use super::short_date;
use crate::resource_page::{resource_page, AdminResource};
use crate::table::{Column, Lookups};
use crate::widgets::{DetailRow, StatCard, StatusBadge, Tone};

impl AdminResource for BlogPost {
    const TITLE: &'static str = "Community Blog";
    const NOUN: &'static str = "Blog Post";
    const SEARCH_PLACEHOLDER: &'static str = "Search posts by title, author or tag...";
    const VIEWABLE: bool = true;

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Post", |p, _| {
                rsx! {
                    div {
                        class: "cell-with-thumb",
                        if !p.image.is_empty() {
                            img { class: "cell-thumb", src: "{p.image}", alt: "{p.title}" }
                        }
                        div {
                            div { "{p.title}" }
                            div { class: "cell-muted", "by {p.author}" }
                        }
                    }
                }
            }),
            Column::new("Publish Date", |p, _| rsx! { "{short_date(&p.publish_date)}" }),
            Column::new("Tags", |p, _| {
                let tags = p.tags.join(", ");
                rsx! { "{tags}" }
            }),
            Column::new("Status", |p, _| rsx! { StatusBadge { status: p.status.clone() } }),
        ]
    }

    fn search_text(&self) -> Vec<String> {
        let mut text = vec![self.title.clone(), self.author.clone()];
        text.extend(self.tags.iter().cloned());
        text
    }

    fn label(&self) -> String {
        format!("\"{}\"", self.title)
    }

    /// Preview of the post as readers will see it.
    fn detail(&self, _lookups: &Lookups) -> Element {
        rsx! {
            if !self.image.is_empty() {
                div {
                    class: "detail-media",
                    img { src: "{self.image}", alt: "{self.title}" }
                }
            }
            DetailRow { label: "Title", value: self.title.clone() }
            DetailRow { label: "Author", value: self.author.clone() }
            DetailRow { label: "Status", value: self.status.clone() }
            DetailRow { label: "Tags", value: self.tags.join(", ") }
            div { class: "detail-html", dangerous_inner_html: "{self.content}" }
        }
    }

    fn stat_cards(state: &PageState<Self>) -> Vec<StatCard> {
        let published = state.count_where(BlogPost::is_published);
        vec![
            StatCard::new("Published", published, Tone::Success),
            StatCard::new("Drafts", state.records().len() - published, Tone::Warning),
        ]
    }
}

#[component]
pub fn Blog() -> Element {
    resource_page::<BlogPost>()
}
