//! Compiled-in seed catalog
//!
//! Five sample builder profiles shown to every user regardless of what has
//! been persisted locally. Fixed and immutable; identifiers 1-5 are reserved
//! for them (user-created profiles use creation-timestamp millis, which never
//! collide with this range).

use buidlmatch_domain::{Availability, ExperienceLevel, Profile, Role};

/// Return the seed catalog in presentation order.
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: 1,
            name: "Alex Chen".into(),
            role: Role::Developer,
            bio: "Full-stack developer passionate about ZK proofs and privacy-preserving \
                  applications. Looking for a co-founder to build the next generation of DeFi \
                  tools on Miden. I have 5+ years of experience in blockchain development and \
                  have contributed to several open-source projects."
                .into(),
            skills: string_vec(&["Solidity", "Rust", "ZK Proofs", "Smart Contracts", "DeFi"]),
            experience: Some(ExperienceLevel::Senior),
            location: Some("San Francisco, CA".into()),
            timezone: Some("PST".into()),
            github: Some("github.com/alexchen".into()),
            twitter: Some("@alexchen_dev".into()),
            telegram: Some("@alexchen".into()),
            looking_for: string_vec(&["Co-founder", "Technical Partner"]),
            project_types: string_vec(&["DeFi Protocol", "Privacy Tech"]),
            availability: Some(Availability::FullTime),
            is_current_user: false,
        },
        Profile {
            id: 2,
            name: "Sarah Kim".into(),
            role: Role::Founder,
            bio: "Serial entrepreneur with 2 successful exits. Currently exploring \
                  opportunities in Web3 infrastructure. Seeking technical co-founder for \
                  stealth mode project focused on cross-chain interoperability. Strong \
                  background in product strategy and business development."
                .into(),
            skills: string_vec(&[
                "Product Management",
                "Business Development",
                "Tokenomics",
                "Marketing",
            ]),
            experience: Some(ExperienceLevel::Expert),
            location: Some("New York, NY".into()),
            timezone: Some("EST".into()),
            github: None,
            twitter: Some("@sarahkim_web3".into()),
            telegram: Some("@sarahkim".into()),
            looking_for: string_vec(&["Technical Partner", "Co-founder"]),
            project_types: string_vec(&["Infrastructure", "Cross-chain"]),
            availability: Some(Availability::FullTime),
            is_current_user: false,
        },
        Profile {
            id: 3,
            name: "Marcus Johnson".into(),
            role: Role::Developer,
            bio: "Blockchain engineer with 5+ years experience. Specialized in smart contracts \
                  and Layer 2 solutions. Ready to build something revolutionary on Miden. \
                  Previously worked at ConsenSys and contributed to Ethereum scaling solutions."
                .into(),
            skills: string_vec(&[
                "Solidity",
                "Layer 2",
                "Smart Contracts",
                "JavaScript",
                "Node.js",
            ]),
            experience: Some(ExperienceLevel::Senior),
            location: Some("London, UK".into()),
            timezone: Some("GMT".into()),
            github: Some("github.com/marcusj".into()),
            twitter: Some("@marcus_blockchain".into()),
            telegram: None,
            looking_for: string_vec(&["Co-founder", "Team Member"]),
            project_types: string_vec(&["Layer 2", "Infrastructure"]),
            availability: Some(Availability::PartTime),
            is_current_user: false,
        },
        Profile {
            id: 4,
            name: "Elena Rodriguez".into(),
            role: Role::Founder,
            bio: "Product leader from Google. Passionate about decentralized identity and \
                  privacy. Looking for developers who share the vision of a more private \
                  internet. Led product teams of 20+ engineers and launched products used by \
                  millions."
                .into(),
            skills: string_vec(&[
                "Product Management",
                "UI/UX Design",
                "Privacy Tech",
                "Community Building",
            ]),
            experience: Some(ExperienceLevel::Expert),
            location: Some("Austin, TX".into()),
            timezone: Some("CST".into()),
            github: None,
            twitter: Some("@elena_privacy".into()),
            telegram: Some("@elenarodriguez".into()),
            looking_for: string_vec(&["Technical Partner", "Developer"]),
            project_types: string_vec(&["Privacy Tech", "Social"]),
            availability: Some(Availability::FullTime),
            is_current_user: false,
        },
        Profile {
            id: 5,
            name: "David Park".into(),
            role: Role::Designer,
            bio: "Frontend wizard and UX enthusiast. Love creating beautiful, intuitive \
                  interfaces for complex Web3 applications. Seeking ambitious founders to \
                  collaborate with. Previously designed for Coinbase and Uniswap."
                .into(),
            skills: string_vec(&["UI/UX Design", "React", "TypeScript", "Next.js", "Web3"]),
            experience: Some(ExperienceLevel::Senior),
            location: Some("Los Angeles, CA".into()),
            timezone: Some("PST".into()),
            github: Some("github.com/davidpark".into()),
            twitter: Some("@davidpark_design".into()),
            telegram: None,
            looking_for: string_vec(&["Co-founder", "Collaborator"]),
            project_types: string_vec(&["DeFi Protocol", "NFT Marketplace"]),
            availability: Some(Availability::Flexible),
            is_current_user: false,
        },
    ]
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
