//! Every hard-coded record the landing page renders: navigation links,
//! toppers, testimonials, faculty bios, subject catalog, free resources and
//! the differentiator cards. Sections map these through pure record-to-Html
//! functions in `pages::home`, so the copy lives in one place.

/// Color accent applied to avatars, icons and card headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Pink,
}

impl Accent {
    pub fn avatar_class(self) -> &'static str {
        match self {
            Accent::Blue => "av-blue",
            Accent::Purple => "av-purple",
            Accent::Green => "av-green",
            Accent::Pink => "av-pink",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Accent::Blue => "icon-blue",
            Accent::Purple => "icon-purple",
            Accent::Green => "icon-green",
            Accent::Pink => "icon-pink",
        }
    }

    pub fn header_class(self) -> &'static str {
        match self {
            Accent::Blue => "fh-blue",
            Accent::Purple => "fh-purple",
            Accent::Green => "fh-green",
            Accent::Pink => "fh-pink",
        }
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Courses", href: "#courses" },
    NavLink { label: "Resources", href: "#resources" },
    NavLink { label: "Toppers", href: "#toppers" },
    NavLink { label: "Faculty", href: "#faculty" },
];

pub const FOOTER_LINKS: [&str; 6] = ["About", "Courses", "Resources", "Toppers", "Faculty", "Contact"];

pub const HERO_SUB_LINES: [&str; 3] = [
    "Board ke liye clarity.",
    "Exam ke liye confidence.",
    "Aur physics jo dar nahi — dost ban jaaye.",
];

pub const HERO_HIGHLIGHTS: [&str; 3] = [
    "Class 9–12 Physics",
    "Concept clarity guaranteed",
    "Short revision videos",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ABOUT_STATS: [Stat; 3] = [
    Stat { value: "12K+", label: "Students Trained" },
    Stat { value: "95%", label: "Success Rate" },
    Stat { value: "50+", label: "AIR Toppers" },
];

pub struct NoteCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub topics: u8,
    pub accent: Accent,
}

pub const NOTE_CATEGORIES: [NoteCategory; 6] = [
    NoteCategory { title: "Mechanics", icon: "🔧", topics: 14, accent: Accent::Blue },
    NoteCategory { title: "Thermodynamics", icon: "🌡️", topics: 8, accent: Accent::Purple },
    NoteCategory { title: "Electromagnetism", icon: "⚡", topics: 11, accent: Accent::Green },
    NoteCategory { title: "Optics", icon: "🔦", topics: 9, accent: Accent::Blue },
    NoteCategory { title: "Modern Physics", icon: "⚛️", topics: 7, accent: Accent::Purple },
    NoteCategory { title: "Waves & Sound", icon: "🎵", topics: 6, accent: Accent::Green },
];

pub struct FreeResource {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub accent: Accent,
}

pub const FREE_RESOURCES: [FreeResource; 4] = [
    FreeResource {
        icon: "📄",
        title: "Class 11 Mechanics — Full PDF Notes",
        detail: "45 pages • Concepts + Practice",
        accent: Accent::Blue,
    },
    FreeResource {
        icon: "🎥",
        title: "Newton's Laws — 1-Min Revision Video",
        detail: "Quick recap before exam",
        accent: Accent::Purple,
    },
    FreeResource {
        icon: "📝",
        title: "JEE Starter Quiz — 20 Questions",
        detail: "Test your understanding",
        accent: Accent::Green,
    },
    FreeResource {
        icon: "🎧",
        title: "Doubt Session Recording — Electromagnetism",
        detail: "60 min • Common confusions cleared",
        accent: Accent::Blue,
    },
];

pub struct Topper {
    pub name: &'static str,
    pub exam: &'static str,
    pub score: &'static str,
    pub initials: &'static str,
    pub accent: Accent,
    pub rank_badge: &'static str,
}

pub const TOPPERS: [Topper; 4] = [
    Topper {
        name: "Arjun Mehta",
        exam: "JEE Advanced 2024",
        score: "AIR 47",
        initials: "AM",
        accent: Accent::Blue,
        rank_badge: "🏆 Top 50",
    },
    Topper {
        name: "Sneha Rao",
        exam: "NEET 2024",
        score: "720/720",
        initials: "SR",
        accent: Accent::Purple,
        rank_badge: "⭐ Perfect",
    },
    Topper {
        name: "Ravi Kumar",
        exam: "JEE Main 2024",
        score: "AIR 312",
        initials: "RK",
        accent: Accent::Green,
        rank_badge: "🥇 Top 500",
    },
    Topper {
        name: "Priya Nair",
        exam: "NEET 2024",
        score: "698/720",
        initials: "PN",
        accent: Accent::Pink,
        rank_badge: "🌟 Top 100",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub class_info: &'static str,
    pub initials: &'static str,
    pub accent: Accent,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Physics lagta tha bahut mushkil, par Fit Physics ke concept-based videos ne sab kuch clear kar diya. JEE Main mein 95 percentile aaya!",
        name: "Rahul S.",
        class_info: "Class XII, Delhi",
        initials: "RS",
        accent: Accent::Blue,
    },
    Testimonial {
        quote: "Teachers yahan sachchi care karte hain. Har doubt solve hota hai — class mein bhi, doubt session mein bhi. NEET preparation perfect rahi.",
        name: "Aisha K.",
        class_info: "Class XI, Mumbai",
        initials: "AK",
        accent: Accent::Purple,
    },
    Testimonial {
        quote: "1-minute revision videos are a game changer! Exam se pehle sirf 2 ghante mein sab kuch refresh kar liya. Highly recommend!",
        name: "Vikram P.",
        class_info: "Class X, Bangalore",
        initials: "VP",
        accent: Accent::Green,
    },
];

pub struct Differentiator {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub number: &'static str,
}

pub const DIFFERENTIATORS: [Differentiator; 6] = [
    Differentiator {
        icon: "🧠",
        title: "Concept-Based Learning",
        blurb: "Rote memorization nahi — har concept ko root se samajho. Formulas automatically yaad hote hain jab samajh aata hai.",
        number: "01",
    },
    Differentiator {
        icon: "⚡",
        title: "1-Minute Smart Revision",
        blurb: "Exam se pehle quick revision ke liye short, punchy videos. Poori chapter 1 minute mein refresh.",
        number: "02",
    },
    Differentiator {
        icon: "🎯",
        title: "Board + Competitive Prep",
        blurb: "CBSE Board, JEE, aur NEET — ek hi platform par sab kuch. Integrated curriculum jo sab exams cover karta hai.",
        number: "03",
    },
    Differentiator {
        icon: "💬",
        title: "Personal Doubt Sessions",
        blurb: "Har student ka doubt important hai. Weekly live sessions mein seedha teacher se poochh sakte ho.",
        number: "04",
    },
    Differentiator {
        icon: "📱",
        title: "Online + Offline Flexibility",
        blurb: "Ghar se padho ya coaching center aao — apni convenience se. Hybrid model fully available.",
        number: "05",
    },
    Differentiator {
        icon: "📊",
        title: "Track Your Progress",
        blurb: "Regular tests aur analytics batayenge kitna improve hua hai. Weak spots identify karke strengthen karo.",
        number: "06",
    },
];

pub struct FacultyMember {
    pub name: &'static str,
    pub subject: &'static str,
    pub experience: &'static str,
    pub initials: &'static str,
    pub accent: Accent,
    pub bio: &'static str,
}

pub const FACULTY: [FacultyMember; 3] = [
    FacultyMember {
        name: "Mr. Deepak Arora",
        subject: "Mechanics & Thermodynamics",
        experience: "12 Years Experience",
        initials: "DA",
        accent: Accent::Blue,
        bio: "IIT-BHU alumnus. Specializes in making Newton's laws and energy concepts crystal clear.",
    },
    FacultyMember {
        name: "Ms. Priya Sharma",
        subject: "Electromagnetism & Optics",
        experience: "9 Years Experience",
        initials: "PS",
        accent: Accent::Purple,
        bio: "Former NEET expert. Known for her unique visual teaching approach to wave physics.",
    },
    FacultyMember {
        name: "Mr. Anand Joshi",
        subject: "Modern Physics & Quantum",
        experience: "15 Years Experience",
        initials: "AJ",
        accent: Accent::Green,
        bio: "IIT-Delhi graduate. Makes quantum mechanics and nuclear physics feel accessible.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_unique(keys: &[&str]) -> bool {
        keys.iter().collect::<HashSet<_>>().len() == keys.len()
    }

    #[test]
    fn list_keys_are_unique() {
        assert!(all_unique(&TOPPERS.map(|t| t.name)));
        assert!(all_unique(&TESTIMONIALS.map(|t| t.name)));
        assert!(all_unique(&FACULTY.map(|f| f.name)));
        assert!(all_unique(&NOTE_CATEGORIES.map(|c| c.title)));
        assert!(all_unique(&FREE_RESOURCES.map(|r| r.title)));
        assert!(all_unique(&NAV_LINKS.map(|l| l.href)));
    }

    #[test]
    fn nav_links_target_page_anchors() {
        for link in &NAV_LINKS {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
        }
    }

    #[test]
    fn differentiators_are_numbered_in_order() {
        for (i, d) in DIFFERENTIATORS.iter().enumerate() {
            assert_eq!(d.number, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn every_note_category_has_topics() {
        for category in &NOTE_CATEGORIES {
            assert!(category.topics > 0);
        }
    }
}
