use crate::services::word::{Sentence, Word};

struct SeedWord {
    eng: &'static str,
    tw: &'static str,
    day: u32,
    sentences: &'static [(&'static str, &'static str)],
}

const SEED_WORDS: &[SeedWord] = &[
    SeedWord {
        eng: "resume",
        tw: "履歷表",
        day: 1,
        sentences: &[(
            "Fax Your resume and cover letter to the above number.",
            "請把你的履歷表和求職信傳真到上面的號碼。",
        )],
    },
    SeedWord {
        eng: "opening",
        tw: "空缺、職缺、開張、開始",
        day: 1,
        sentences: &[(
            "There are several job openings at the restaurant right now.",
            "這間餐廳目前有好幾個職缺。",
        )],
    },
    SeedWord {
        eng: "application",
        tw: "申請、應用程式",
        day: 1,
        sentences: &[(
            "Please submit your application by the end of this month.",
            "請在本月底前提交您的申請。",
        )],
    },
    SeedWord {
        eng: "interview",
        tw: "面試",
        day: 2,
        sentences: &[(
            "I have a job interview tomorrow morning.",
            "我明天早上有工作面試。",
        )],
    },
    SeedWord {
        eng: "experience",
        tw: "經驗",
        day: 2,
        sentences: &[(
            "She has five years of experience in marketing.",
            "她在行銷方面有五年的經驗。",
        )],
    },
    SeedWord {
        eng: "qualification",
        tw: "資格",
        day: 2,
        sentences: &[(
            "Do you have the necessary qualifications for this position?",
            "你具備這個職位所需的資格嗎？",
        )],
    },
    SeedWord {
        eng: "schedule",
        tw: "時間表、排程",
        day: 3,
        sentences: &[(
            "Please check your schedule for next week.",
            "請檢查你下週的時間表。",
        )],
    },
    SeedWord {
        eng: "appointment",
        tw: "約會、預約",
        day: 3,
        sentences: &[(
            "I need to make an appointment with the doctor.",
            "我需要和醫生預約。",
        )],
    },
    SeedWord {
        eng: "deadline",
        tw: "截止日期",
        day: 3,
        sentences: &[(
            "The deadline for this project is next Friday.",
            "這個專案的截止日期是下週五。",
        )],
    },
    SeedWord {
        eng: "meeting",
        tw: "會議",
        day: 4,
        sentences: &[(
            "We have a team meeting at 2 PM today.",
            "我們今天下午2點有團隊會議。",
        )],
    },
    SeedWord {
        eng: "presentation",
        tw: "簡報、展示",
        day: 4,
        sentences: &[(
            "The presentation will begin in ten minutes.",
            "簡報將在十分鐘後開始。",
        )],
    },
    SeedWord {
        eng: "conference",
        tw: "會議、研討會",
        day: 4,
        sentences: &[(
            "The annual conference will be held in Tokyo.",
            "年度研討會將在東京舉行。",
        )],
    },
];

/// Embedded word list served when no store is configured (demo mode).
pub fn fallback_words() -> Vec<Word> {
    SEED_WORDS
        .iter()
        .map(|seed| Word {
            eng_word: seed.eng.to_string(),
            tw_word: seed.tw.to_string(),
            day: seed.day,
            sentences: seed
                .sentences
                .iter()
                .map(|(eng, tw)| Sentence {
                    eng_sentences: eng.to_string(),
                    tw_sentences: tw.to_string(),
                })
                .collect(),
        })
        .collect()
}
