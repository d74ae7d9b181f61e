use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use pulldown_cmark::{Options, Parser};

#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::highlight::highlight;

/// How many excerpts the home page shows.
pub const LATEST_COUNT: usize = 3;

/// Rendered posts by slug. Only slugs that exist in [`Assets`] are ever stored.
pub static GLOBAL_POST_CACHE: LazyLock<DashMap<String, Post>> = LazyLock::new(DashMap::new);
/// Post listings by limit. The server only stores [`ALL_POSTS`], the browser
/// only stores [`LATEST_COUNT`].
pub static GLOBAL_LIST_CACHE: LazyLock<DashMap<usize, Vec<PostMeta>>> =
    LazyLock::new(DashMap::new);

/// Cache key for the full, untruncated listing.
pub const ALL_POSTS: usize = usize::MAX;

#[derive(Embed)]
#[folder = "blog"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    tag: String,
    author: String,
    date: DateTime<Utc>,
    excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub tag: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub excerpt: String,
}

impl PostMeta {
    /// Month and year, e.g. "Aug 2025".
    pub fn display_date(&self) -> String {
        self.date.format("%b %Y").to_string()
    }

    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    /// Rendered HTML body.
    pub content: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("blog post not found: {0}")]
    NotFound(String),
    #[error("{0} is not valid UTF-8")]
    Encoding(String),
    #[error("bad front matter in {0}")]
    FrontMatter(String),
    #[error("couldn't highlight code in {file}: {reason}")]
    Highlight { file: String, reason: String },
}

/// Caches a successful listing. Failures are not stored so the next request retries.
pub fn remember_list<E>(limit: usize, result: &Result<Vec<PostMeta>, E>) {
    if let Ok(posts) = result {
        GLOBAL_LIST_CACHE.insert(limit, posts.clone());
    }
}

/// Caches a successfully loaded post. Failures are not stored.
pub fn remember_post<E>(slug: &str, result: &Result<Post, E>) {
    if let Ok(post) = result {
        GLOBAL_POST_CACHE.insert(slug.to_string(), post.clone());
    }
}

/// `my-post.md` -> `my-post`.
pub fn slug_of(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(".md").filter(|s| !s.is_empty())
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn load(file_name: &str) -> Result<String, BlogError> {
    let file = Assets::get(file_name).ok_or_else(|| BlogError::NotFound(file_name.to_string()))?;
    String::from_utf8(file.data.into_owned()).map_err(|_| BlogError::Encoding(file_name.to_string()))
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn parse_post(file_name: &str, raw: &str) -> Result<Post, BlogError> {
    let slug = slug_of(file_name).ok_or_else(|| BlogError::NotFound(file_name.to_string()))?;
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(raw)
        .ok_or_else(|| BlogError::FrontMatter(file_name.to_string()))?;
    let fm = parsed.data;

    let events = highlight(Parser::new_ext(&parsed.content, Options::all())).map_err(|e| {
        BlogError::Highlight {
            file: file_name.to_string(),
            reason: e.to_string(),
        }
    })?;
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, events.into_iter());

    Ok(Post {
        meta: PostMeta {
            slug: slug.to_string(),
            title: fm.title,
            tag: fm.tag,
            author: fm.author,
            date: fm.date,
            excerpt: fm.excerpt,
        },
        content: html_output,
    })
}

/// Newest first, at most `limit` entries. Only the full listing is cached, so
/// arbitrary limits can't grow the cache.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn list_posts(limit: Option<usize>) -> Result<Vec<PostMeta>, BlogError> {
    let limit = limit.unwrap_or(ALL_POSTS);
    if let Some(cached) = GLOBAL_LIST_CACHE.get(&ALL_POSTS) {
        return Ok(cached.iter().take(limit).cloned().collect());
    }

    let posts = Assets::iter()
        .map(|name| {
            let raw = load(&name)?;
            parse_post(&name, &raw).map(|p| p.meta)
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|mut posts| {
            posts.sort_by(|a, b| b.date.cmp(&a.date));
            posts
        });
    remember_list(ALL_POSTS, &posts);
    Ok(posts?.into_iter().take(limit).collect())
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn get_post(slug: &str) -> Result<Post, BlogError> {
    if let Some(cached) = GLOBAL_POST_CACHE.get(slug) {
        return Ok(cached.clone());
    }
    let file_name = format!("{slug}.md");
    if Assets::get(&file_name).is_none() {
        return Err(BlogError::NotFound(slug.to_string()));
    }
    let post = load(&file_name).and_then(|raw| parse_post(&file_name, &raw));
    remember_post(slug, &post);
    post
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_requires_markdown_extension() {
        assert_eq!(slug_of("toolset.md"), Some("toolset"));
        assert_eq!(slug_of(".md"), None);
        assert_eq!(slug_of("notes.txt"), None);
    }

    fn sample_meta(slug: &str) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: "Judul".to_string(),
            tag: "Teknologi".to_string(),
            author: "Ridho Robbi Pasi".to_string(),
            date: DateTime::parse_from_rfc3339("2025-08-22T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            excerpt: "Ringkasan".to_string(),
        }
    }

    #[test]
    fn failed_fetches_are_not_cached() {
        remember_post::<&str>("gagal-sementara", &Err("network down"));
        assert!(GLOBAL_POST_CACHE.get("gagal-sementara").is_none());

        let key = 4242;
        remember_list::<&str>(key, &Err("network down"));
        assert!(GLOBAL_LIST_CACHE.get(&key).is_none());

        let post = Post {
            meta: sample_meta("berhasil"),
            content: "<p>isi</p>".to_string(),
        };
        remember_post::<&str>("berhasil", &Ok(post.clone()));
        assert_eq!(GLOBAL_POST_CACHE.get("berhasil").map(|p| p.clone()), Some(post));
        remember_list::<&str>(key, &Ok(vec![sample_meta("berhasil")]));
        assert_eq!(GLOBAL_LIST_CACHE.get(&key).map(|l| l.len()), Some(1));
    }

    #[test]
    fn every_embedded_file_has_a_slug() {
        let names: Vec<_> = Assets::iter().collect();
        assert!(!names.is_empty());
        assert!(names.iter().all(|n| slug_of(n).is_some()));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    mod rendering {
        use super::super::*;

        const SAMPLE: &str = r#"---
title: "Contoh"
tag: "Teknologi"
author: "Ridho Robbi Pasi"
date: 2025-08-22T00:00:00Z
excerpt: "Ringkasan singkat."
---

Paragraf **tebal**.

```rust
fn main() {}
```
"#;

        #[test]
        fn parses_front_matter_and_body() {
            let post = parse_post("contoh.md", SAMPLE).unwrap();
            assert_eq!(post.meta.slug, "contoh");
            assert_eq!(post.meta.tag, "Teknologi");
            assert_eq!(post.meta.display_date(), "Aug 2025");
            assert_eq!(post.meta.href(), "/blog/contoh");
            assert!(post.content.contains("<strong>tebal</strong>"));
            assert!(!post.content.contains("excerpt:"));
        }

        #[test]
        fn code_blocks_are_highlighted() {
            let post = parse_post("contoh.md", SAMPLE).unwrap();
            assert!(post.content.contains("<pre style="));
            assert!(!post.content.contains("<code class=\"language-rust\">"));
        }

        #[test]
        fn missing_front_matter_is_an_error() {
            let err = parse_post("kosong.md", "no front matter here").unwrap_err();
            assert_eq!(err, BlogError::FrontMatter("kosong.md".to_string()));
        }

        #[test]
        fn lists_newest_first_and_respects_limit() {
            let all = list_posts(None).unwrap();
            assert!(all.len() >= LATEST_COUNT);
            assert!(all.windows(2).all(|w| w[0].date >= w[1].date));
            let latest = list_posts(Some(1)).unwrap();
            assert_eq!(latest, all[..1].to_vec());
        }

        #[test]
        fn unknown_slug_is_not_found() {
            assert_eq!(
                get_post("tidak-ada"),
                Err(BlogError::NotFound("tidak-ada".to_string()))
            );
            assert!(GLOBAL_POST_CACHE.get("tidak-ada").is_none());
        }

        #[test]
        fn caches_stay_bounded_under_arbitrary_requests() {
            for limit in 0..2_000 {
                let posts = list_posts(Some(limit)).unwrap();
                assert!(posts.len() <= limit);
            }
            for i in 0..2_000 {
                let slug = format!("tidak-ada-{i}");
                assert!(get_post(&slug).is_err());
            }
            assert!(GLOBAL_LIST_CACHE.get(&ALL_POSTS).is_some());
            for limit in 1..2_000 {
                assert!(GLOBAL_LIST_CACHE.get(&limit).is_none(), "limit {limit} was cached");
            }
            assert!(GLOBAL_POST_CACHE.iter().all(|e| !e.key().starts_with("tidak-ada")));
        }

        #[test]
        fn embedded_post_renders() {
            let first = list_posts(None).unwrap().remove(0);
            let post = get_post(&first.slug).unwrap();
            assert_eq!(post.meta, first);
            assert!(!post.content.is_empty());
        }
    }
}
