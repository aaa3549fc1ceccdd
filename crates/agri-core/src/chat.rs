//! Canned Farming Assistant
//!
//! Keyword-matched static answers in English and Bengali. There is no
//! model and no memory: the same input in the same language always gets
//! the same reply.
//!
//! ```text
//! input ──► lowercase ──► first rule with a matching keyword ──► reply[lang]
//!                                  │ none
//!                                  ▼
//!                              fallback[lang]
//! ```

use crate::i18n::Language;
use crate::model::{ChatMessage, Role};

/// One topic: keywords in either language, one reply per language
struct Rule {
    keywords: &'static [&'static str],
    en: &'static str,
    bn: &'static str,
}

impl Rule {
    fn matches(&self, input: &str) -> bool {
        self.keywords.iter().any(|k| keyword_in(input, k))
    }

    const fn reply(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Bn => self.bn,
        }
    }
}

/// English keywords must start a word ("rain" matches "rainfall" but not
/// "drain"). Bengali keywords match anywhere since suffixes attach directly.
fn keyword_in(input: &str, keyword: &str) -> bool {
    if !keyword.is_ascii() {
        return input.contains(keyword);
    }
    input
        .match_indices(keyword)
        .any(|(at, _)| input[..at].chars().next_back().is_none_or(|c| !c.is_alphanumeric()))
}

// Order matters: the first matching rule wins. Greetings and thanks come
// last so "hello, how do I grow rice?" is answered about rice.
static RULES: &[Rule] = &[
    Rule {
        keywords: &["rice", "paddy", "ধান"],
        en: "Rice grows best in clayey or alluvial soil with standing water of about 5 cm during the vegetative stage. Transplant 25-30 day old seedlings at 20x15 cm spacing, apply urea in three splits, and watch for brown plant hopper in humid weather.",
        bn: "ধান কাদামাটি বা পলিমাটিতে সবচেয়ে ভালো হয়। চারা অবস্থায় জমিতে প্রায় ৫ সেমি পানি রাখুন। ২৫-৩০ দিনের চারা ২০x১৫ সেমি দূরত্বে রোপণ করুন, ইউরিয়া তিন কিস্তিতে দিন এবং আর্দ্র আবহাওয়ায় বাদামী গাছফড়িং এর দিকে নজর রাখুন।",
    },
    Rule {
        keywords: &["wheat", "গম"],
        en: "Sow wheat from mid-November to early December in well-drained loamy soil. Irrigate at crown root initiation (about 20 days after sowing) and again at flowering, and apply potash before flowering for better grain filling.",
        bn: "নভেম্বরের মাঝামাঝি থেকে ডিসেম্বরের শুরুতে ভালো নিষ্কাশনযুক্ত দোআঁশ মাটিতে গম বপন করুন। বপনের প্রায় ২০ দিন পর এবং ফুল আসার সময় সেচ দিন। ভালো দানার জন্য ফুল আসার আগে পটাশ প্রয়োগ করুন।",
    },
    Rule {
        keywords: &["potato", "আলু"],
        en: "Plant potatoes in loose sandy loam with good drainage. Earth up the rows 30 days after planting, keep the soil moist but never waterlogged, and spray against late blight when foggy, cool weather sets in.",
        bn: "ঝুরঝুরে বেলে দোআঁশ মাটিতে আলু রোপণ করুন যেখানে পানি নিষ্কাশন ভালো। রোপণের ৩০ দিন পর মাটি তুলে দিন, মাটি আর্দ্র রাখুন কিন্তু পানি জমতে দেবেন না, এবং কুয়াশাচ্ছন্ন ঠান্ডা আবহাওয়ায় নাবি ধসা রোগের জন্য স্প্রে করুন।",
    },
    Rule {
        keywords: &["jute", "পাট"],
        en: "Jute needs warm, humid weather and well-drained alluvial soil. Sow in March-April, thin plants to 7-10 cm apart, and harvest at the early pod stage for the best fibre quality.",
        bn: "পাটের জন্য উষ্ণ ও আর্দ্র আবহাওয়া এবং ভালো নিষ্কাশনযুক্ত পলিমাটি প্রয়োজন। মার্চ-এপ্রিলে বপন করুন, গাছের মধ্যে ৭-১০ সেমি দূরত্ব রাখুন এবং সেরা আঁশের জন্য ফল আসার শুরুতে কাটুন।",
    },
    Rule {
        keywords: &["vegetable", "tomato", "brinjal", "সবজি", "টমেটো", "বেগুন"],
        en: "For vegetables, use raised beds with plenty of compost, rotate crop families every season, and water early in the morning. Mulching keeps soil moisture steady and suppresses weeds.",
        bn: "সবজির জন্য প্রচুর কম্পোস্ট দিয়ে উঁচু বেড তৈরি করুন, প্রতি মৌসুমে ফসল পরিবর্তন করুন এবং সকালে পানি দিন। মালচিং মাটির আর্দ্রতা ধরে রাখে এবং আগাছা কমায়।",
    },
    Rule {
        keywords: &["fertilizer", "fertiliser", "urea", "manure", "compost", "সার", "ইউরিয়া", "কম্পোস্ট"],
        en: "Base fertilizer doses on a soil test. As a rule of thumb, apply phosphorus and potash at final land preparation and split nitrogen (urea) into two or three top-dressings. Organic manure improves soil structure and nutrient retention.",
        bn: "মাটি পরীক্ষার ভিত্তিতে সারের মাত্রা ঠিক করুন। সাধারণভাবে শেষ চাষের সময় ফসফরাস ও পটাশ দিন এবং নাইট্রোজেন (ইউরিয়া) দুই বা তিন কিস্তিতে উপরি প্রয়োগ করুন। জৈব সার মাটির গঠন ও পুষ্টি ধারণক্ষমতা বাড়ায়।",
    },
    Rule {
        keywords: &["pest", "insect", "bug", "aphid", "hopper", "কীটপতঙ্গ", "পোকা"],
        en: "Use integrated pest management: inspect fields weekly, install light and pheromone traps, encourage natural predators, and spray pesticides only when damage crosses the economic threshold.",
        bn: "সমন্বিত বালাই ব্যবস্থাপনা ব্যবহার করুন: প্রতি সপ্তাহে জমি পরিদর্শন করুন, আলোক ও ফেরোমন ফাঁদ বসান, উপকারী পোকা সংরক্ষণ করুন এবং ক্ষতি অর্থনৈতিক সীমা ছাড়ালেই কেবল কীটনাশক স্প্রে করুন।",
    },
    Rule {
        keywords: &["irrigat", "water", "drought", "সেচ", "পানি", "খরা"],
        en: "Irrigate according to crop stage rather than a fixed calendar. Alternate wetting and drying saves up to 30% water in rice, and drip irrigation works well for vegetables. Check soil moisture before each irrigation.",
        bn: "নির্দিষ্ট তারিখ নয়, ফসলের পর্যায় অনুযায়ী সেচ দিন। ধানে পর্যায়ক্রমে ভেজানো ও শুকানো পদ্ধতিতে ৩০% পর্যন্ত পানি সাশ্রয় হয়, আর সবজিতে ড্রিপ সেচ ভালো কাজ করে। প্রতিবার সেচের আগে মাটির আর্দ্রতা দেখে নিন।",
    },
    Rule {
        keywords: &["weather", "rain", "monsoon", "flood", "temperature", "আবহাওয়া", "বৃষ্টি", "বর্ষা", "বন্যা"],
        en: "Weather drives yield more than any other factor. Heavy monsoon rain can waterlog fields and spread fungal disease, while heat above 35°C during flowering reduces grain set. Plan sowing around the forecast and keep drainage channels clear.",
        bn: "আবহাওয়া ফলনের উপর সবচেয়ে বেশি প্রভাব ফেলে। ভারী বর্ষায় জমিতে পানি জমে ছত্রাকজনিত রোগ ছড়াতে পারে, আর ফুল আসার সময় ৩৫°সে এর বেশি তাপমাত্রা দানা গঠন কমায়। পূর্বাভাস দেখে বপনের পরিকল্পনা করুন এবং নালা পরিষ্কার রাখুন।",
    },
    Rule {
        keywords: &["soil", "acid", "মাটি"],
        en: "Healthy soil has a pH between 6.0 and 7.0 and at least 3% organic matter. Test your soil every season, add lime to acidic soil, and grow green manure crops to rebuild organic matter.",
        bn: "সুস্থ মাটির পিএইচ ৬.০ থেকে ৭.০ এর মধ্যে এবং জৈব পদার্থ অন্তত ৩% থাকে। প্রতি মৌসুমে মাটি পরীক্ষা করুন, অম্লীয় মাটিতে চুন দিন এবং জৈব পদার্থ বাড়াতে সবুজ সার ফসল চাষ করুন।",
    },
    Rule {
        keywords: &["disease", "blight", "blast", "fungus", "wilt", "রোগ", "ছত্রাক"],
        en: "Most crop diseases spread in warm, humid conditions. Use certified disease-free seed, remove infected plants early, avoid excess nitrogen, and apply a recommended fungicide at the first sign of symptoms.",
        bn: "বেশিরভাগ ফসলের রোগ উষ্ণ ও আর্দ্র অবস্থায় ছড়ায়। প্রত্যয়িত রোগমুক্ত বীজ ব্যবহার করুন, আক্রান্ত গাছ দ্রুত সরিয়ে ফেলুন, অতিরিক্ত নাইট্রোজেন এড়িয়ে চলুন এবং লক্ষণ দেখা দিলেই অনুমোদিত ছত্রাকনাশক প্রয়োগ করুন।",
    },
    Rule {
        keywords: &["price", "market", "sell", "দাম", "বাজার", "বিক্রি"],
        en: "Prices usually dip right after harvest. If you have dry storage, holding part of the crop for a few weeks often pays off. Compare prices across nearby markets and consider selling through a farmer cooperative.",
        bn: "ফসল কাটার ঠিক পরে সাধারণত দাম কমে যায়। শুকনো গুদাম থাকলে ফসলের একটি অংশ কয়েক সপ্তাহ রেখে দিলে প্রায়ই লাভ হয়। আশেপাশের বাজারের দাম তুলনা করুন এবং কৃষক সমবায়ের মাধ্যমে বিক্রির কথা ভাবুন।",
    },
    Rule {
        keywords: &["hello", "hey", "good morning", "নমস্কার", "হ্যালো", "সালাম"],
        en: "Hello! Ask me about crops, soil, fertilizer, irrigation, pests or the weather and I will share practical tips.",
        bn: "নমস্কার! ফসল, মাটি, সার, সেচ, কীটপতঙ্গ বা আবহাওয়া সম্পর্কে জিজ্ঞাসা করুন, আমি ব্যবহারিক পরামর্শ দেব।",
    },
    Rule {
        keywords: &["thank", "ধন্যবাদ"],
        en: "You're welcome! Happy farming. Ask me anytime you need help.",
        bn: "আপনাকে স্বাগতম! শুভ চাষাবাদ। যখনই সাহায্য প্রয়োজন, জিজ্ঞাসা করুন।",
    },
];

const FALLBACK_EN: &str = "I'm not sure about that yet. Try asking about rice, wheat, potato, jute, vegetables, fertilizer, pests, irrigation, weather, soil, crop diseases or market prices.";
const FALLBACK_BN: &str = "এ বিষয়ে আমি এখনো নিশ্চিত নই। ধান, গম, আলু, পাট, সবজি, সার, কীটপতঙ্গ, সেচ, আবহাওয়া, মাটি, ফসলের রোগ বা বাজারদর সম্পর্কে জিজ্ঞাসা করে দেখুন।";

/// Stateless keyword responder
#[derive(Clone, Copy, Debug, Default)]
pub struct ChatResponder;

impl ChatResponder {
    pub fn respond(input: &str, lang: Language) -> &'static str {
        let input = input.to_lowercase();
        RULES.iter().find(|rule| rule.matches(&input)).map_or_else(
            || match lang {
                Language::En => FALLBACK_EN,
                Language::Bn => FALLBACK_BN,
            },
            |rule| rule.reply(lang),
        )
    }
}

/// Suggested prompt shown under a fresh conversation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub query: &'static str,
}

pub const fn quick_actions(lang: Language) -> [QuickAction; 3] {
    match lang {
        Language::En => [
            QuickAction { label: "Crop tips", query: "Give me tips for growing rice" },
            QuickAction { label: "Weather", query: "How does weather affect crops?" },
            QuickAction { label: "Pests", query: "How to control pests?" },
        ],
        Language::Bn => [
            QuickAction { label: "ফসলের টিপস", query: "ধান চাষের টিপস দিন" },
            QuickAction { label: "আবহাওয়া", query: "আবহাওয়া কিভাবে ফসলকে প্রভাবিত করে?" },
            QuickAction { label: "কীটপতঙ্গ", query: "কীটপতঙ্গ নিয়ন্ত্রণ কিভাবে করব?" },
        ],
    }
}

/// Quick actions stay visible until the user has had one exchange
const QUICK_ACTION_LIMIT: usize = 2;

/// Chat history for the widget
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    language: Language,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Start with the localized welcome message
    pub fn new(language: Language) -> Self {
        Self {
            language,
            messages: vec![ChatMessage::assistant(language.translations().chat.welcome)],
        }
    }

    /// Discard history and greet again in `language`
    pub fn reset(&mut self, language: Language) {
        *self = Self::new(language);
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record a user message. Blank input is ignored and returns `None`.
    pub fn push_user(&mut self, content: &str) -> Option<&ChatMessage> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(content));
        self.messages.last()
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.messages.push(ChatMessage::assistant(content));
        &self.messages[self.messages.len() - 1]
    }

    /// Reply to the latest user message in the conversation language
    pub fn reply_to_last(&mut self) -> Option<&ChatMessage> {
        let question = self
            .messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)?
            .content
            .clone();
        let answer = ChatResponder::respond(&question, self.language);
        Some(self.push_assistant(answer))
    }

    pub fn show_quick_actions(&self) -> bool {
        self.messages.len() <= QUICK_ACTION_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_matches() {
        let reply = ChatResponder::respond("How much WATER does my field need?", Language::En);
        assert!(reply.contains("Irrigate"));

        let reply = ChatResponder::respond("ধান চাষের টিপস দিন", Language::Bn);
        assert!(reply.starts_with("ধান"));
    }

    #[test]
    fn test_keywords_match_at_word_start() {
        let weather = ChatResponder::respond("weather", Language::En);
        let greeting = ChatResponder::respond("hello", Language::En);

        assert_ne!(ChatResponder::respond("How do I improve drainage?", Language::En), weather);
        assert_ne!(ChatResponder::respond("Which grain should I plant?", Language::En), weather);
        assert_ne!(ChatResponder::respond("They told me to plant early", Language::En), greeting);
        assert_eq!(ChatResponder::respond("How do I debug my sensor?", Language::En), FALLBACK_EN);
        assert!(ChatResponder::respond("What is the price today?", Language::En).starts_with("Prices"));

        assert_eq!(ChatResponder::respond("Heavy rainfall expected", Language::En), weather);
        assert!(ChatResponder::respond("irrigation schedule", Language::En).starts_with("Irrigate"));
        assert!(ChatResponder::respond("ধানের জাত", Language::Bn).starts_with("ধান"));
    }

    #[test]
    fn test_reply_follows_requested_language() {
        let en = ChatResponder::respond("rice", Language::En);
        let bn = ChatResponder::respond("rice", Language::Bn);
        assert_ne!(en, bn);
        assert_eq!(bn, ChatResponder::respond("ধান", Language::Bn));
    }

    #[test]
    fn test_topic_beats_greeting() {
        let reply = ChatResponder::respond("Hello! any tips for wheat?", Language::En);
        assert!(reply.contains("wheat"));
        let reply = ChatResponder::respond("hello", Language::En);
        assert!(reply.starts_with("Hello!"));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(ChatResponder::respond("quantum physics", Language::En), FALLBACK_EN);
        assert_eq!(ChatResponder::respond("", Language::Bn), FALLBACK_BN);
    }

    #[test]
    fn test_quick_actions_have_answers() {
        for lang in Language::ALL {
            for action in quick_actions(lang) {
                let reply = ChatResponder::respond(action.query, lang);
                assert_ne!(reply, FALLBACK_EN);
                assert_ne!(reply, FALLBACK_BN);
            }
        }
    }

    #[test]
    fn test_conversation_flow() {
        let mut chat = Conversation::new(Language::En);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, Role::Assistant);
        assert!(chat.show_quick_actions());

        assert!(chat.push_user("   ").is_none());
        chat.push_user("pests are eating my crop").unwrap();
        assert!(chat.show_quick_actions());

        let reply = chat.reply_to_last().unwrap().content.clone();
        assert!(reply.contains("pest"));
        assert!(!chat.show_quick_actions());
    }

    #[test]
    fn test_reset_on_language_change() {
        let mut chat = Conversation::new(Language::En);
        chat.push_user("hello");
        chat.reset(Language::Bn);
        assert_eq!(chat.language(), Language::Bn);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].content, Language::Bn.translations().chat.welcome);
    }
}
