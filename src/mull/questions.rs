//! The built-in reflection question bank. Questions are compiled in; their
//! ids are stable and must never be reused, since saved answers refer to them.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub category: &'static str,
    pub text: &'static str,
}

pub const QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        category: "Gratitude",
        text: "What are you grateful for today?",
    },
    Question {
        id: 2,
        category: "Gratitude",
        text: "Who made your day a little better, and how?",
    },
    Question {
        id: 3,
        category: "Growth",
        text: "What did you learn today, however small?",
    },
    Question {
        id: 4,
        category: "Growth",
        text: "What would you do differently if today started over?",
    },
    Question {
        id: 5,
        category: "Values",
        text: "What mattered most to you today?",
    },
    Question {
        id: 6,
        category: "Values",
        text: "Did you spend your time on what you care about?",
    },
    Question {
        id: 7,
        category: "Relationships",
        text: "Is there a conversation you have been putting off?",
    },
    Question {
        id: 8,
        category: "Relationships",
        text: "Who do you want to reach out to this week?",
    },
    Question {
        id: 9,
        category: "Wellbeing",
        text: "What drained your energy today, and what restored it?",
    },
    Question {
        id: 10,
        category: "Wellbeing",
        text: "How does your body feel right now?",
    },
    Question {
        id: 11,
        category: "Future",
        text: "What is one small thing tomorrow-you will thank you for?",
    },
    Question {
        id: 12,
        category: "Future",
        text: "Where do you want to be a year from today?",
    },
];

pub fn random() -> &'static Question {
    let idx = rand::thread_rng().gen_range(0..QUESTIONS.len());
    &QUESTIONS[idx]
}

pub fn by_id(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert!(
                !QUESTIONS[i + 1..].iter().any(|other| other.id == q.id),
                "duplicate question id {}",
                q.id
            );
        }
    }

    #[test]
    fn by_id_finds_known_question() {
        let q = by_id(5).unwrap();
        assert_eq!(q.id, 5);
    }

    #[test]
    fn by_id_unknown_is_none() {
        assert!(by_id(9999).is_none());
    }

    #[test]
    fn random_returns_a_bank_question() {
        let q = random();
        assert!(QUESTIONS.iter().any(|other| other.id == q.id));
    }
}
