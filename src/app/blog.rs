use leptos::{prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::use_params_map};

#[cfg(feature = "ssr")]
use crate::blog::{get_post, list_posts};
#[cfg(feature = "hydrate")]
use crate::blog::{remember_list, remember_post};
use crate::{
    blog::{Post, PostMeta, GLOBAL_LIST_CACHE, GLOBAL_POST_CACHE, LATEST_COUNT},
    content::anchors,
    navigation::anchor_href,
};

use super::layout::{Card, CardBody, Section};

#[server(input = GetUrl)]
pub async fn latest_posts(limit: usize) -> Result<Vec<PostMeta>, ServerFnError> {
    list_posts(Some(limit.min(LATEST_COUNT))).map_err(|e| {
        tracing::error!("listing blog posts: {e}");
        ServerFnError::new("Couldn't load blog posts")
    })
}

#[server(input = GetUrl)]
pub async fn get_post_server(slug: String) -> Result<Post, ServerFnError> {
    get_post(&slug).map_err(|e| {
        tracing::warn!("loading blog post {slug}: {e}");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn BlogSection() -> impl IntoView {
    let posts = Resource::new(
        || LATEST_COUNT,
        |limit| async move {
            let cache = &*GLOBAL_LIST_CACHE;
            if let Some(posts) = cache.get(&limit) {
                return (*posts).clone();
            }
            let posts = latest_posts(limit).await;
            // the server keeps its own cache in `list_posts`
            #[cfg(feature = "hydrate")]
            remember_list(limit, &posts);
            posts.unwrap_or_default()
        },
    );

    view! {
        <Section id=anchors::BLOG subtitle="Blog / Insight" title="Tulisan Terbaru">
            <Transition fallback=move || {
                view! {
                    <div class="grid gap-6 md:grid-cols-3">
                        <div class="h-48 animate-pulse rounded-2xl bg-slate-200 dark:bg-white/5"></div>
                        <div class="h-48 animate-pulse rounded-2xl bg-slate-200 dark:bg-white/5"></div>
                        <div class="h-48 animate-pulse rounded-2xl bg-slate-200 dark:bg-white/5"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    let posts = posts.await;
                    view! {
                        <div class="grid gap-6 md:grid-cols-3">
                            {posts.into_iter().map(|post| view! { <PostCard post /> }).collect_view()}
                        </div>
                    }
                })}
            </Transition>
        </Section>
    }
}

#[component]
fn PostCard(post: PostMeta) -> impl IntoView {
    let href = post.href();
    let date = post.display_date();
    view! {
        <Card>
            <CardBody>
                <div class="mb-2 flex items-center justify-between text-xs">
                    <span class="rounded-full bg-blue-600/10 px-2 py-1 font-semibold text-blue-700 dark:text-blue-400">
                        {post.tag}
                    </span>
                    <span class="opacity-70">{date}</span>
                </div>
                <h4 class="text-lg font-bold">{post.title}</h4>
                <p class="mt-2 text-sm text-slate-600 dark:text-slate-300">{post.excerpt}</p>
                <A
                    href=href
                    attr:class="mt-4 inline-flex items-center gap-1 text-blue-700 dark:text-blue-400"
                >
                    "Baca selengkapnya →"
                </A>
            </CardBody>
        </Card>
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("post").unwrap_or_default();
    let post = Resource::new(slug, |slug| async move {
        let cache = &*GLOBAL_POST_CACHE;
        if let Some(cached) = cache.get(&slug) {
            return Ok(cached.clone());
        }
        let post = get_post_server(slug.clone()).await;
        #[cfg(feature = "hydrate")]
        remember_post(&slug, &post);
        post
    });

    view! {
        <article class="mx-auto max-w-3xl px-4 py-16">
            <a
                href=anchor_href(anchors::BLOG)
                class="text-sm text-blue-700 hover:underline dark:text-blue-400"
            >
                "← Kembali ke blog"
            </a>
            <Suspense fallback=move || {
                view! { <div class="mt-8 h-64 animate-pulse rounded-2xl bg-slate-200 dark:bg-white/5"></div> }
            }>
                {move || Suspend::new(async move {
                    match post.await {
                        Ok(p) => {
                            let date = p.meta.display_date();
                            view! {
                                <Title text=p.meta.title.clone() />
                                <header class="mt-6 mb-8">
                                    <span class="rounded-full bg-blue-600/10 px-2 py-1 text-xs font-semibold text-blue-700 dark:text-blue-400">
                                        {p.meta.tag}
                                    </span>
                                    <h1 class="mt-3 text-3xl md:text-4xl font-extrabold text-slate-900 dark:text-white">
                                        {p.meta.title}
                                    </h1>
                                    <p class="mt-2 text-sm opacity-70">
                                        {format!("{} · {}", p.meta.author, date)}
                                    </p>
                                </header>
                                <div
                                    class="prose prose-slate max-w-none dark:prose-invert"
                                    inner_html=p.content
                                ></div>
                            }
                                .into_any()
                        }
                        Err(_) => {
                            view! {
                                <Title text="Tulisan tidak ditemukan" />
                                <p class="mt-8 text-slate-600 dark:text-slate-300">
                                    "Tulisan tidak ditemukan."
                                </p>
                            }
                                .into_any()
                        }
                    }
                })}
            </Suspense>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn latest_posts_caps_the_requested_limit() {
        let posts = latest_posts(10_000).await.unwrap();
        assert!(posts.len() <= LATEST_COUNT);
        assert!(!GLOBAL_LIST_CACHE.contains_key(&10_000));
    }
}
