//! Static page content. Nothing here is interpreted; the renderer only
//! lays it out. Image paths are relative to the configured asset base URL.

#[derive(Debug, Clone, Copy)]
pub struct Photo {
    pub path: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub headshot: Photo,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub tagline: &'static str,
    pub badges: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct About {
    pub paragraphs: &'static [&'static str],
    pub highlights: &'static [Card],
    pub photos: &'static [Photo],
}

#[derive(Debug, Clone, Copy)]
pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Professional {
    pub roles: &'static [Role],
    pub skill_groups: &'static [SkillGroup],
    pub certification: Card,
}

#[derive(Debug, Clone, Copy)]
pub struct Shaping {
    pub paragraphs: &'static [&'static str],
    pub services: &'static [Card],
    pub photos: &'static [Photo],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub url: Option<&'static str>,
    pub description: &'static str,
    pub diagram: Option<Photo>,
    pub points: &'static [&'static str],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub label: &'static str,
    pub href: &'static str,
    pub display: &'static str,
    pub external: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub prompt: &'static str,
    pub channels: &'static [ContactChannel],
    pub availability: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub hero: Hero,
    pub about: About,
    pub professional: Professional,
    pub shaping: Shaping,
    pub projects: &'static [Project],
    pub contact: Contact,
    pub footer: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub static PROFILE: Profile = Profile {
    first_name: "Conner",
    last_name: "Reavill",
    hero: Hero {
        headshot: Photo {
            path: "headshot.webp",
            alt: "Conner Reavill professional headshot",
            caption: "",
        },
        headline: "Solutions",
        headline_accent: "Architect",
        tagline: "Cloud systems engineer with a passion for craftsmanship and global perspective",
        badges: &["AWS Certified", "🌍 World Traveler", "🏄 Board Shaper"],
    },
    about: About {
        paragraphs: &[
            "After graduating from Cal Poly with a degree in Software Engineering, I took a transformative gap year to travel around the world. From surfing perfect barrels in Indonesia to exploring ancient temples in Japan, living in Australia for a year, and island-hopping through the Philippines, this journey shaped my perspective on problem-solving and adaptability.",
            "During my travels, I built Wave-Finder, a surf forecasting platform using AWS and web scraping techniques. Working from beachside warungs in Bali and co-working spaces in Melbourne taught me to code efficiently and think creatively about cloud architecture constraints.",
            "Now based in San Diego, I'm pursuing my passion for cloud architecture while maintaining my connection to the ocean through surfboard shaping. I believe the same principles that create a perfect wave ride apply to elegant system design: balance, flow, and understanding the forces at play.",
            "Currently working towards my AWS Solutions Architect certification and helping train the next generation of AI systems, I'm excited to bring creative problem-solving to cloud infrastructure challenges.",
        ],
        highlights: &[
            Card {
                title: "Gap Year Journey",
                body: "15 months across Japan, Indonesia, Australia, and the Philippines - gaining global perspective and cultural adaptability",
            },
            Card {
                title: "Current Focus",
                body: "AWS Solutions Architect certification (October 2025) and advanced cloud architecture patterns",
            },
        ],
        photos: &[
            Photo {
                path: "travel/japan.webp",
                alt: "Traditional temple in Japan",
                caption: "Temples & Culture in Japan",
            },
            Photo {
                path: "travel/indonesia.webp",
                alt: "Surfing waves in Indonesia",
                caption: "Perfect Waves in Indonesia",
            },
        ],
    },
    professional: Professional {
        roles: &[
            Role {
                title: "AI Data Specialist",
                company: "DataAnnotation.tech",
                period: "March 2024 – Present",
                summary: "Training large language models for improved accuracy and performance while leveraging remote flexibility to pursue advanced AWS cloud architecture training.",
            },
            Role {
                title: "Front End Developer",
                company: "BadabingMP",
                period: "2022 – 2023",
                summary: "Built responsive React.js applications and implemented CI/CD pipelines using GitHub Actions, reducing manual errors and accelerating delivery.",
            },
            Role {
                title: "Systems Engineering Intern",
                company: "Visa Inc.",
                period: "Summer 2022",
                summary: "Optimized mission-critical mainframe systems processing millions of daily transactions and collaborated on high-availability financial system architecture.",
            },
        ],
        skill_groups: &[
            SkillGroup {
                title: "Cloud & Infrastructure",
                skills: &["AWS EC2", "S3", "RDS", "CloudFront", "Docker", "Terraform", "CI/CD"],
            },
            SkillGroup {
                title: "Development",
                skills: &["React.js", "Python", "JavaScript", "Node.js", "PostgreSQL", "REST APIs"],
            },
            SkillGroup {
                title: "ML & AI",
                skills: &["TensorFlow", "PyTorch", "NLTK", "Machine Learning"],
            },
        ],
        certification: Card {
            title: "AWS Solutions Architect – Associate",
            body: "Exam: October 2025",
        },
    },
    shaping: Shaping {
        paragraphs: &[
            "What started as a passion for surfing naturally evolved into the art and science of board shaping. Working with foam, fiberglass, and resin, I craft custom surfboards and provide ding repair services in my spare time.",
            "Each board is a unique engineering challenge: understanding hydrodynamics, rider preferences, and wave conditions to create the perfect tool for the water. It's a meditative process that balances technical precision with creative expression.",
            "This hands-on craft keeps me grounded and connected to San Diego's surf community, while the problem-solving skills translate beautifully to systems architecture.",
        ],
        services: &[
            Card {
                title: "Custom Boards",
                body: "Tailored designs for every rider",
            },
            Card {
                title: "Ding Repair",
                body: "Professional fiberglass repair",
            },
            Card {
                title: "San Diego",
                body: "Local surf community service",
            },
        ],
        photos: &[
            Photo {
                path: "surfboards/board-1.webp",
                alt: "In the shaping bay",
                caption: "Custom longboard taking shape",
            },
            Photo {
                path: "surfboards/board-2.webp",
                alt: "Surfboard shaping tools and workspace",
                caption: "A custom midlength for a client",
            },
            Photo {
                path: "surfboards/board-3.webp",
                alt: "Finished surfboards lined up ready for delivery",
                caption: "Custom 9 foot log for the central coast",
            },
        ],
    },
    projects: &[
        Project {
            title: "Wave-Finder",
            url: Some("https://thewavefinder.com"),
            description: "ML-powered surf forecasting platform built during my world travels. Live at thewavefinder.com, combining custom ML models with NOAA APIs and intelligent web scraping, deployed using enterprise-grade AWS architecture.",
            diagram: Some(Photo {
                path: "wavefinder-architecture.png",
                alt: "Wave-Finder AWS architecture diagram showing Route 53, CloudFront, S3, API Gateway, Lambda, Aurora DB, and CI/CD pipeline",
                caption: "Complete AWS Architecture with CI/CD Pipeline",
            }),
            points: &[
                "Built while traveling: Coded from warungs in Bali and co-working spaces in Melbourne",
                "Serverless backend using AWS Lambda with Aurora Serverless database",
                "React frontend on S3 with CloudFront CDN for global distribution",
                "Automated CI/CD with GitHub Actions for zero-downtime deployments",
            ],
            tags: &[
                "React",
                "AWS Lambda",
                "Aurora DB",
                "S3",
                "CloudFront",
                "Route 53",
                "API Gateway",
                "GitHub Actions",
            ],
        },
        Project {
            title: "Departmental QA Chat",
            url: None,
            description: "NLP chatbot for Cal Poly CS Department using TensorFlow and NLTK to automate student Q&A responses. Trained on departmental documentation to reduce faculty workload.",
            diagram: None,
            points: &[
                "Natural language processing with NLTK",
                "TensorFlow model training and deployment",
                "Automated response system integration",
            ],
            tags: &["Python", "TensorFlow", "NLTK", "NLP", "Machine Learning"],
        },
    ],
    contact: Contact {
        prompt: "Ready to discuss cloud architecture, surfboard design, or travel stories?",
        channels: &[
            ContactChannel {
                label: "Email",
                href: "mailto:reavill.conner@gmail.com",
                display: "reavill.conner@gmail.com",
                external: false,
            },
            ContactChannel {
                label: "Phone",
                href: "tel:(931) 393-2921",
                display: "(931) 393-2921",
                external: false,
            },
            ContactChannel {
                label: "LinkedIn",
                href: "https://linkedin.com/in/creavill",
                display: "linkedin.com/in/creavill",
                external: true,
            },
            ContactChannel {
                label: "GitHub",
                href: "https://github.com/creavill",
                display: "github.com/creavill",
                external: true,
            },
        ],
        availability: &[
            "Based in San Diego, CA",
            "Open to remote opportunities",
            "Available for consulting",
        ],
    },
    footer: "Built with Rust • Deployed on AWS • Shaped with passion",
};
