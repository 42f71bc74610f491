//! HTML rendering of the two collections.
//!
//! Every element a browser test needs to find carries a `data-cy` attribute:
//! `review-card` per review, `trending-topic` per topic, `loading` while a
//! fetch is outstanding and `error` when the last attempt failed.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::fetch_state::FetchState;
use crate::types::{Review, TrendingTopic};

pub fn render_reviews(state: &FetchState<Review>) -> String {
    let mut out = String::from("<section data-cy=\"opiniones\">\n");
    push_status(&mut out, state, "Cargando opiniones...");

    for review in &state.items {
        out.push_str("  <article data-cy=\"review-card\" class=\"review-card\">\n");
        out.push_str(&format!(
            "    <p class=\"opinion\">{}</p>\n",
            encode_text(review.text().unwrap_or_default())
        ));
        for (class, value) in [
            ("sentimiento", review.sentimiento()),
            ("categoria", review.categoria()),
            ("temas", review.temas()),
        ] {
            if let Some(value) = value {
                out.push_str(&format!(
                    "    <span class=\"{class}\">{}</span>\n",
                    encode_text(value)
                ));
            }
        }
        out.push_str("  </article>\n");
    }

    out.push_str("</section>\n");
    out
}

pub fn render_trending(state: &FetchState<TrendingTopic>) -> String {
    let mut out = String::from("<section data-cy=\"trending\">\n");
    push_status(&mut out, state, "Cargando trending topics...");

    if !state.items.is_empty() {
        out.push_str("  <ol>\n");
        for topic in &state.items {
            let name = encode_text(topic.topic().unwrap_or_default());
            match topic.url() {
                Some(url) => out.push_str(&format!(
                    "    <li data-cy=\"trending-topic\"><a href=\"{}\">{name}</a></li>\n",
                    encode_double_quoted_attribute(url)
                )),
                None => out.push_str(&format!("    <li data-cy=\"trending-topic\">{name}</li>\n")),
            }
        }
        out.push_str("  </ol>\n");
    }

    out.push_str("</section>\n");
    out
}

/// Full document with both sections inside `#app`.
pub fn render_page(reviews: &FetchState<Review>, trending: &FetchState<TrendingTopic>) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Opiniones y Trending Topics</title>\n</head>\n<body>\n<div id=\"app\">\n{}{}</div>\n</body>\n</html>\n",
        render_reviews(reviews),
        render_trending(trending)
    )
}

fn push_status<T>(out: &mut String, state: &FetchState<T>, loading_text: &str) {
    if state.loading {
        out.push_str(&format!("  <p data-cy=\"loading\">{loading_text}</p>\n"));
    }
    if let Some(error) = &state.error {
        out.push_str(&format!("  <p data-cy=\"error\" class=\"error\">{}</p>\n", encode_text(error)));
    }
}
