use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::{blog::PostMeta, config::SiteConfig, content::PROFILE};

/// Where the generated feed lands, relative to the crate root.
pub const FEED_PATH: &str = "public/rss.xml";

pub fn build_channel(posts: &[PostMeta], config: &SiteConfig) -> Channel {
    let items = posts
        .iter()
        .map(|p| {
            let link = config.url(&p.href());
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            let author = format!("{} ({})", PROFILE.email_address(), p.author);
            ItemBuilder::default()
                .title(p.title.clone())
                .description(p.excerpt.clone())
                .author(author)
                .categories(vec![CategoryBuilder::default().name(p.tag.clone()).build()])
                .pub_date(p.date.to_rfc2822())
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(config.url("/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(format!("Blog {}", PROFILE.name))
        .description(PROFILE.hero_tagline)
        .link(config.url("/#blog"))
        .language("id-id".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(slug: &str) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: "Judul".to_string(),
            tag: "Teknologi".to_string(),
            author: "Ridho Robbi Pasi".to_string(),
            date: Utc.with_ymd_and_hms(2025, 8, 22, 0, 0, 0).unwrap(),
            excerpt: "Ringkasan".to_string(),
        }
    }

    #[test]
    fn items_link_to_absolute_post_urls() {
        let config = SiteConfig {
            base_url: "https://ridho.example".to_string(),
        };
        let channel = build_channel(&[post("toolset")], &config);
        assert_eq!(channel.link(), "https://ridho.example/#blog");
        let item = &channel.items()[0];
        assert_eq!(item.link(), Some("https://ridho.example/blog/toolset"));
        assert_eq!(item.description(), Some("Ringkasan"));
        assert_eq!(item.categories()[0].name(), "Teknologi");
        assert_eq!(item.pub_date(), Some("Fri, 22 Aug 2025 00:00:00 +0000"));
    }

    #[test]
    fn empty_blog_still_builds_a_channel() {
        let channel = build_channel(&[], &SiteConfig::default());
        assert!(channel.items().is_empty());
        assert_eq!(channel.language(), Some("id-id"));
    }
}
