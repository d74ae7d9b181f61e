//! Everything the page says about its owner. Components only read from here.

use std::fmt;

/// A skill or progress percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Level(u8);

impl Level {
    pub const MAX: u8 = 100;

    /// Values above [`Level::MAX`] saturate.
    pub const fn new(value: u8) -> Self {
        if value > Self::MAX {
            Level(Self::MAX)
        } else {
            Level(value)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Socials {
    pub instagram: &'static str,
    pub instagram2: &'static str,
    pub threads: &'static str,
    pub facebook: &'static str,
    pub youtube: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub nickname: &'static str,
    pub short_name: &'static str,
    pub birth: &'static str,
    pub age: &'static str,
    pub status: &'static str,
    pub location: &'static str,
    pub hero_tagline: &'static str,
    pub portrait: &'static str,
    pub cv_path: &'static str,
    pub socials: Socials,
}

impl Profile {
    /// Plain address behind the `mailto:` social link.
    pub fn email_address(&self) -> &'static str {
        self.socials
            .email
            .strip_prefix("mailto:")
            .unwrap_or(self.socials.email)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub year: u16,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct About {
    pub bio: &'static str,
    pub roles: &'static [&'static str],
    pub role_models: &'static [&'static str],
    pub timeline: &'static [Milestone],
    pub vision: &'static str,
    pub mission: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: Level,
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill {
        name,
        level: Level::new(level),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillSet {
    pub hard: &'static [Skill],
    pub soft: &'static [Skill],
    pub languages: &'static [Skill],
}

#[derive(Debug, Clone, Copy)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub desc: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Portfolio {
    pub coding: &'static [PortfolioItem],
    pub design: &'static [PortfolioItem],
    pub content: &'static [PortfolioItem],
    pub activities: &'static [PortfolioItem],
}

#[derive(Debug, Clone, Copy)]
pub struct RoadmapPhase {
    pub year: u16,
    pub phase: &'static str,
    pub bullets: &'static [&'static str],
    pub progress: Level,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// Element ids of the page sections, used both for `id=` and `href="/#..."`.
pub mod anchors {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const SKILLS: &str = "skills";
    pub const PORTFOLIO: &str = "portfolio";
    pub const ROADMAP: &str = "roadmap";
    pub const BLOG: &str = "blog";
    pub const GALLERY: &str = "gallery";
    pub const TESTIMONIALS: &str = "testimoni";
    pub const CONTACT: &str = "contact";

    /// Every section the page renders, top to bottom.
    pub const ALL: &[&str] = &[
        HOME,
        ABOUT,
        SKILLS,
        PORTFOLIO,
        ROADMAP,
        BLOG,
        GALLERY,
        TESTIMONIALS,
        CONTACT,
    ];
}

pub const NAV_LINKS: &[NavItem] = &[
    NavItem {
        id: anchors::ABOUT,
        label: "Tentang",
    },
    NavItem {
        id: anchors::SKILLS,
        label: "Skill",
    },
    NavItem {
        id: anchors::PORTFOLIO,
        label: "Portofolio",
    },
    NavItem {
        id: anchors::ROADMAP,
        label: "Roadmap",
    },
    NavItem {
        id: anchors::BLOG,
        label: "Blog",
    },
    NavItem {
        id: anchors::GALLERY,
        label: "Galeri",
    },
    NavItem {
        id: anchors::CONTACT,
        label: "Kontak",
    },
];

pub const PROFILE: Profile = Profile {
    name: "Ridho Robbi Pasi",
    nickname: "Ridho",
    short_name: "Ridho RP",
    birth: "Sitinjo, Dairi, 24 April 2006",
    age: "19 tahun (2025)",
    status: "Mahasiswa baru D3 Teknik Informatika, Fakultas Vokasi, Universitas Sumatera Utara (USU)",
    location: "Sitinjo, Dairi, Sumatera Utara",
    hero_tagline: "Muslim, Mahasiswa, Technopreneur, dan Calon Politisi Muda",
    portrait: "https://images.unsplash.com/photo-1547425260-76bcadfb4f2c?q=80&w=1200&auto=format&fit=crop",
    cv_path: "/Ridho_Robbi_Pasi_CV.pdf",
    socials: Socials {
        instagram: "https://instagram.com/ridhopasii",
        instagram2: "https://instagram.com/edunara.academy",
        threads: "https://www.threads.net/@ridhopasii",
        facebook: "https://facebook.com/ridhorobbipasi",
        youtube: "https://www.youtube.com/@RidhoRobbiPasi",
        email: "mailto:ridhopasi@gmail.com",
    },
};

pub const ABOUT: About = About {
    bio: "Seorang pemuda visioner, lulusan Pesantren Arraudlatul Hasanah Medan. Punya passion di teknologi, bisnis, dan dunia digital-konten. Visi saya: menjadi muslim yang berguna dan dermawan serta membangun perusahaan teknologi internasional. Misi: berkontribusi lewat bisnis dan politik, memajukan daerah, dan berdakwah melalui digital.",
    roles: &[
        "Technopreneur Muda",
        "Digital Creator",
        "Mahasiswa TI (USU)",
        "Calon Politisi",
    ],
    role_models: &[
        "Nabi Muhammad SAW",
        "Abdurrahman bin Auf",
        "Jono Pasi",
        "Anies Baswedan",
        "Mark Zuckerberg",
    ],
    timeline: &[
        Milestone {
            year: 2006,
            text: "Lahir di Sitinjo, Dairi",
        },
        Milestone {
            year: 2025,
            text: "Lulus Pesantren & mulai D3 TI USU",
        },
        Milestone {
            year: 2028,
            text: "Scale bisnis & studi lanjut",
        },
        Milestone {
            year: 2035,
            text: "Ekspansi bisnis internasional & politik nasional",
        },
    ],
    vision: "Muslim yang berguna, dermawan, membangun perusahaan teknologi internasional.",
    mission: "Berkontribusi lewat bisnis & politik, memajukan daerah, dakwah digital.",
};

pub const SKILLS: SkillSet = SkillSet {
    hard: &[
        skill("Laravel", 75),
        skill("HTML", 90),
        skill("CSS", 82),
        skill("Figma", 85),
        skill("Canva", 88),
        skill("Photoshop", 70),
        skill("Video Editing", 78),
    ],
    soft: &[
        skill("Leadership", 86),
        skill("Public Speaking", 80),
        skill("Growth Mindset", 92),
    ],
    languages: &[
        skill("Indonesia", 100),
        skill("Inggris", 65),
        skill("Arab", 40),
    ],
};

pub const PORTFOLIO: Portfolio = Portfolio {
    coding: &[
        PortfolioItem {
            title: "Landing Page Travel Toba",
            desc: "Website sederhana dengan React + Tailwind, fokus pada UX pesanan wisata Danau Toba.",
            link: Some("#"),
        },
        PortfolioItem {
            title: "Personal Starter",
            desc: "Starter portfolio statis dengan Vite + Tailwind, performa kilat.",
            link: Some("#"),
        },
    ],
    design: &[
        PortfolioItem {
            title: "UI Dashboard Figma",
            desc: "Dashboard admin modern – sistem kursus.",
            link: Some("#"),
        },
        PortfolioItem {
            title: "Poster Dakwah",
            desc: "Poster Canva bertema motivasi dan akhlak.",
            link: Some("#"),
        },
    ],
    content: &[
        PortfolioItem {
            title: "@ridhopasii",
            desc: "Produktivitas, Islami, gaya hidup muslim muda.",
            link: Some(PROFILE.socials.instagram),
        },
        PortfolioItem {
            title: "@edunara.academy",
            desc: "Edukasi & pengembangan diri.",
            link: Some(PROFILE.socials.instagram2),
        },
        PortfolioItem {
            title: "YouTube & Facebook",
            desc: "Motivasi dan insight.",
            link: Some(PROFILE.socials.youtube),
        },
    ],
    activities: &[
        PortfolioItem {
            title: "Pra-kuliah: Program 13 Minggu",
            desc: "Logika Matematika, Dasar Python, Pengantar TI.",
            link: None,
        },
        PortfolioItem {
            title: "DQLab Project",
            desc: "Eksplorasi data dan mini project Python/SQL.",
            link: None,
        },
    ],
};

pub const ROADMAP: &[RoadmapPhase] = &[
    RoadmapPhase {
        year: 2025,
        phase: "Kuliah & Branding",
        bullets: &[
            "Bangun personal brand",
            "Konsisten konten (IG/Threads/YouTube)",
            "Organisasi & jejaring USU",
        ],
        progress: Level::new(30),
    },
    RoadmapPhase {
        year: 2028,
        phase: "Scale Bisnis & Studi Lanjut",
        bullets: &[
            "Mafaza Group tahap growth",
            "Riset market Asia Tenggara",
            "S2/sertifikasi TI",
        ],
        progress: Level::new(60),
    },
    RoadmapPhase {
        year: 2035,
        phase: "Bisnis Internasional & Politik Nasional",
        bullets: &[
            "Ekspansi global",
            "Isu publik & kebijakan digital",
            "Road to DPR RI",
        ],
        progress: Level::new(10),
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Jono Pasi",
        role: "Ayah",
        text: "Ridho itu konsisten, mau belajar, dan selalu ingat amanah.",
    },
    Testimonial {
        name: "Ustadz Pesantren",
        role: "Guru",
        text: "Adabnya baik, semangat dakwah digitalnya kuat.",
    },
    Testimonial {
        name: "Sahabat Kuliah",
        role: "Teman",
        text: "Anaknya gerak cepat, idenya out of the box, tapi tetap membumi.",
    },
];

// Placeholder photos, swap for real ones
pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        src: "https://images.unsplash.com/photo-1519389950473-47ba0277781c?q=80&w=1200&auto=format&fit=crop",
        alt: "Kegiatan tim di depan laptop",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1556157382-97eda2d62296?q=80&w=1200&auto=format&fit=crop",
        alt: "Sesi diskusi",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70?q=80&w=1200&auto=format&fit=crop",
        alt: "Kolaborasi komunitas",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?q=80&w=1200&auto=format&fit=crop",
        alt: "Perencanaan dan desain",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1515378791036-0648a3ef77b2?q=80&w=1200&auto=format&fit=crop",
        alt: "Produksi konten",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1200&auto=format&fit=crop",
        alt: "Perjalanan",
    },
];

pub const TYPING_PHRASES: &[&str] = &[
    "Muslim yang bermanfaat",
    "Mahasiswa TI USU",
    "Technopreneur muda",
    "Calon politisi masa depan",
];

pub const CONTACT_NOTE: &str =
    "*Butuh versi cepat? DM Instagram aja. Janji balasnya nggak ghosting 😄";

pub const FOOTER_PILLS: &[&str] = &["Mafaza Group — Coming Soon", "Road to DPR RI"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_skills() -> impl Iterator<Item = &'static Skill> {
        SKILLS
            .hard
            .iter()
            .chain(SKILLS.soft)
            .chain(SKILLS.languages)
    }

    #[test]
    fn level_saturates_at_max() {
        assert_eq!(Level::new(100).get(), 100);
        assert_eq!(Level::new(101).get(), 100);
        assert_eq!(Level::new(255).get(), 100);
        assert_eq!(Level::new(0).get(), 0);
        assert_eq!(Level::new(42).to_string(), "42%");
    }

    #[test]
    fn levels_are_percentages() {
        for s in all_skills() {
            assert!(s.level.get() <= Level::MAX, "{} out of range", s.name);
        }
        for r in ROADMAP {
            assert!(r.progress.get() <= Level::MAX);
        }
    }

    #[test]
    fn skill_values_match_profile() {
        let html = SKILLS.hard.iter().find(|s| s.name == "HTML").unwrap();
        assert_eq!(html.level.get(), 90);
        let arab = SKILLS.languages.iter().find(|s| s.name == "Arab").unwrap();
        assert_eq!(arab.level.get(), 40);
        assert_eq!(SKILLS.hard.len(), 7);
        assert_eq!(SKILLS.soft.len(), 3);
    }

    #[test]
    fn years_strictly_ascend() {
        assert!(ABOUT.timeline.windows(2).all(|w| w[0].year < w[1].year));
        assert!(ROADMAP.windows(2).all(|w| w[0].year < w[1].year));
    }

    #[test]
    fn nav_links_point_at_rendered_sections() {
        let mut seen = HashSet::new();
        for link in NAV_LINKS {
            assert!(seen.insert(link.id), "duplicate nav id {}", link.id);
            assert!(anchors::ALL.contains(&link.id), "no section {}", link.id);
        }
        let unique: HashSet<_> = anchors::ALL.iter().collect();
        assert_eq!(unique.len(), anchors::ALL.len());
    }

    #[test]
    fn typing_phrases_present() {
        assert!(!TYPING_PHRASES.is_empty());
        assert!(TYPING_PHRASES.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn content_links_reuse_socials() {
        let links: Vec<_> = PORTFOLIO.content.iter().filter_map(|p| p.link).collect();
        assert!(links.contains(&PROFILE.socials.instagram));
        assert!(links.contains(&PROFILE.socials.youtube));
        assert!(PORTFOLIO.activities.iter().all(|a| a.link.is_none()));
    }

    #[test]
    fn email_address_strips_scheme() {
        assert_eq!(PROFILE.email_address(), "ridhopasi@gmail.com");
    }
}
