use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Testimony {
    pub name: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
    pub date: &'static str,
    pub review: &'static str,
    pub helpful: u32,
}

pub const TESTIMONIES: &[Testimony] = &[
    Testimony {
        name: "Thandi M.",
        avatar: "TM",
        rating: 5,
        date: "2 weeks ago",
        review: "I came heavy‑hearted and left with peace. The prayer team stood with me, and I witnessed God’s hand restoring my family.",
        helpful: 9,
    },
    Testimony {
        name: "James R.",
        avatar: "JR",
        rating: 5,
        date: "1 month ago",
        review: "Powerful worship and practical teaching. I felt welcomed from the moment I walked in—this church has become my family.",
        helpful: 6,
    },
    Testimony {
        name: "Ayesha P.",
        avatar: "AP",
        rating: 5,
        date: "3 weeks ago",
        review: "My child loves the Children’s Church and looks forward to Sundays. We’ve seen real growth in our home since coming to ECC.",
        helpful: 11,
    },
];
