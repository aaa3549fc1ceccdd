//! Bilingual Content
//!
//! English/Bengali string tables and the persisted language preference.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::{KeyValueStore, keys};

/// Supported UI languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Bn];

    /// BCP 47 code, also the stored representation
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Bn => "bn",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Self::En),
            "bn" => Some(Self::Bn),
            _ => None,
        }
    }

    /// Name of the language in itself
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Bn => "বাংলা",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Bn,
            Self::Bn => Self::En,
        }
    }

    pub const fn translations(self) -> &'static Translations {
        match self {
            Self::En => &EN,
            Self::Bn => &BN,
        }
    }

    /// Read the stored preference. Missing or unknown values mean English.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get_item(keys::LANGUAGE) {
            Ok(Some(code)) => Self::from_code(&code).unwrap_or_default(),
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("Could not read language preference: {}", e);
                Self::default()
            }
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(self, store: &S) -> Result<()> {
        store.set_item(keys::LANGUAGE, self.code())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// `(key, label)` pairs for a select box
pub type Options = &'static [(&'static str, &'static str)];

/// Look up the label for a stored option key, falling back to the key itself
pub fn option_label<'a>(options: Options, key: &'a str) -> &'a str {
    options
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, label)| label)
}

pub struct Nav {
    pub home: &'static str,
    pub features: &'static str,
    pub pricing: &'static str,
    pub dashboard: &'static str,
    pub login: &'static str,
    pub signup: &'static str,
    pub logout: &'static str,
    pub profile: &'static str,
    pub language: &'static str,
}

pub struct FeatureText {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Landing {
    pub badge: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub features_title: &'static str,
    pub feature_yield: FeatureText,
    pub feature_offline: FeatureText,
    pub feature_chat: FeatureText,
    pub feature_dashboard: FeatureText,
    pub stat_farmers: &'static str,
    pub stat_villages: &'static str,
    pub stat_accuracy: &'static str,
    pub stat_support: &'static str,
    pub get_started: &'static str,
    pub watch_demo: &'static str,
    pub cta_title: &'static str,
    pub cta_subtitle: &'static str,
    pub start_free: &'static str,
    pub contact_sales: &'static str,
    pub offer: &'static str,
    pub claim_now: &'static str,
    pub footer_about: &'static str,
    pub footer_contact: &'static str,
    pub footer_privacy: &'static str,
    pub footer_terms: &'static str,
}

pub struct Auth {
    pub login_title: &'static str,
    pub login_subtitle: &'static str,
    pub signup_title: &'static str,
    pub signup_subtitle: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub confirm_password: &'static str,
    pub name: &'static str,
    pub phone: &'static str,
    pub forgot_password: &'static str,
    pub login_button: &'static str,
    pub signup_button: &'static str,
    pub welcome_back: &'static str,
    pub account_created: &'static str,
}

pub struct Dashboard {
    pub welcome: &'static str,
    pub subtitle: &'static str,
    pub overview: &'static str,
    pub ai_predictions: &'static str,
    pub data_center: &'static str,
    pub soil_analysis: &'static str,
    pub profile: &'static str,
    pub total_farms: &'static str,
    pub active_predictions: &'static str,
    pub last_sync: &'static str,
    pub just_now: &'static str,
    pub free_tier: &'static str,
    pub upgrade_pro: &'static str,
    pub predictions_per_month: &'static str,
    pub chat_queries_per_day: &'static str,
    pub recent_activity: &'static str,
    pub yield_prediction_for: &'static str,
    pub new_prediction: &'static str,
    pub crop_type: &'static str,
    pub soil_type: &'static str,
    pub weather_condition: &'static str,
    pub farm_size: &'static str,
    pub select: &'static str,
    pub predict: &'static str,
    pub predicting: &'static str,
    pub predicted_yield: &'static str,
    pub confidence: &'static str,
    pub recommendations: &'static str,
    pub history: &'static str,
    pub sensor_data: &'static str,
    pub date: &'static str,
    pub source: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub soil_moisture: &'static str,
    pub rainfall: &'static str,
    pub sunlight: &'static str,
    pub export: &'static str,
    pub upload_soil: &'static str,
    pub upload_hint: &'static str,
    pub analyzing: &'static str,
    pub analysis_results: &'static str,
    pub npk_distribution: &'static str,
    pub nitrogen: &'static str,
    pub phosphorus: &'static str,
    pub potassium: &'static str,
    pub ph_level: &'static str,
    pub organic_matter: &'static str,
    pub personal_info: &'static str,
    pub save_changes: &'static str,
    pub location: &'static str,
    pub language_pref: &'static str,
    pub notifications: &'static str,
    pub enable_notifications: &'static str,
    pub offline: &'static str,
    pub online: &'static str,
}

pub struct Chat {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub send: &'static str,
    pub thinking: &'static str,
    pub welcome: &'static str,
    pub online: &'static str,
    pub powered_by: &'static str,
}

pub struct Common {
    pub loading: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub no_data: &'static str,
    pub try_again: &'static str,
    pub not_found: &'static str,
    pub go_home: &'static str,
}

/// Every user-visible string for one language
pub struct Translations {
    pub nav: Nav,
    pub landing: Landing,
    pub auth: Auth,
    pub dashboard: Dashboard,
    pub chat: Chat,
    pub common: Common,
    pub crops: Options,
    pub soils: Options,
    pub weather: Options,
}

static EN: Translations = Translations {
    nav: Nav {
        home: "Home",
        features: "Features",
        pricing: "Pricing",
        dashboard: "Dashboard",
        login: "Login",
        signup: "Sign Up",
        logout: "Logout",
        profile: "Profile",
        language: "Language",
    },
    landing: Landing {
        badge: "AI-Powered Agriculture Platform",
        hero_title: "Revolutionize Farming with AI",
        hero_subtitle: "Harness the power of artificial intelligence to optimize crop yields, predict weather patterns, and make data-driven farming decisions.",
        features_title: "Powerful Features for Modern Farmers",
        feature_yield: FeatureText {
            title: "AI Yield Predictions",
            desc: "Get accurate crop yield forecasts using advanced machine learning models trained on local agricultural data.",
        },
        feature_offline: FeatureText {
            title: "Offline Access",
            desc: "Work seamlessly even without internet. All your data syncs automatically when you reconnect.",
        },
        feature_chat: FeatureText {
            title: "Smart Chatbot",
            desc: "Get instant answers to farming questions in English or Bengali from our AI assistant.",
        },
        feature_dashboard: FeatureText {
            title: "Data Dashboard",
            desc: "Visualize satellite imagery, IoT sensor data, and historical trends in one place.",
        },
        stat_farmers: "Active Farmers",
        stat_villages: "Villages Covered",
        stat_accuracy: "Accuracy Rate",
        stat_support: "24/7 Support",
        get_started: "Get Started Free",
        watch_demo: "Watch Demo",
        cta_title: "Ready to Transform Your Farm?",
        cta_subtitle: "Join thousands of farmers already using AgriAI Hub to increase their yields.",
        start_free: "Start Free Trial",
        contact_sales: "Contact Sales",
        offer: "🎉 Special Offer: Get 50% off Pro plan for your first 3 months!",
        claim_now: "Claim Now",
        footer_about: "About",
        footer_contact: "Contact",
        footer_privacy: "Privacy Policy",
        footer_terms: "Terms of Service",
    },
    auth: Auth {
        login_title: "Welcome Back",
        login_subtitle: "Sign in to access your dashboard",
        signup_title: "Create Account",
        signup_subtitle: "Start your free trial today",
        email: "Email Address",
        password: "Password",
        confirm_password: "Confirm Password",
        name: "Full Name",
        phone: "Phone Number",
        forgot_password: "Forgot password?",
        login_button: "Sign In",
        signup_button: "Create Account",
        welcome_back: "Welcome back!",
        account_created: "Account created and logged in!",
    },
    dashboard: Dashboard {
        welcome: "Welcome back",
        subtitle: "Manage your farms and predictions",
        overview: "Overview",
        ai_predictions: "AI Predictions",
        data_center: "Data Center",
        soil_analysis: "Soil Analysis",
        profile: "Profile",
        total_farms: "Total Farms",
        active_predictions: "Active Predictions",
        last_sync: "Last Sync",
        just_now: "Just now",
        free_tier: "Free Tier",
        upgrade_pro: "Upgrade to Pro",
        predictions_per_month: "predictions/month",
        chat_queries_per_day: "chat queries/day",
        recent_activity: "Recent Activity",
        yield_prediction_for: "Yield prediction for",
        new_prediction: "New Prediction",
        crop_type: "Crop Type",
        soil_type: "Soil Type",
        weather_condition: "Weather Condition",
        farm_size: "Farm Size",
        select: "Select...",
        predict: "Predict Yield",
        predicting: "Analyzing...",
        predicted_yield: "Predicted Yield",
        confidence: "Confidence",
        recommendations: "Recommendations",
        history: "Prediction History",
        sensor_data: "Sensor Data",
        date: "Date",
        source: "Source",
        temperature: "Temperature",
        humidity: "Humidity",
        soil_moisture: "Soil Moisture",
        rainfall: "Rainfall",
        sunlight: "Sunlight",
        export: "Export Data",
        upload_soil: "Upload Soil Report",
        upload_hint: "Upload soil report image or PDF",
        analyzing: "Analyzing...",
        analysis_results: "Analysis Results",
        npk_distribution: "NPK Distribution",
        nitrogen: "Nitrogen (N)",
        phosphorus: "Phosphorus (P)",
        potassium: "Potassium (K)",
        ph_level: "pH Level",
        organic_matter: "Organic Matter",
        personal_info: "Personal Information",
        save_changes: "Save Changes",
        location: "Location",
        language_pref: "Language Preference",
        notifications: "Notifications",
        enable_notifications: "Enable notifications",
        offline: "You are offline",
        online: "Connected",
    },
    chat: Chat {
        title: "AgriAI Assistant",
        placeholder: "Ask me anything about farming...",
        send: "Send",
        thinking: "Thinking...",
        welcome: "Hello! I am your AgriAI assistant. How can I help you with your farming needs today?",
        online: "Online",
        powered_by: "Powered by AgriAI",
    },
    common: Common {
        loading: "Loading...",
        error: "Something went wrong",
        success: "Success!",
        cancel: "Cancel",
        save: "Save",
        no_data: "No data available",
        try_again: "Try Again",
        not_found: "Page not found",
        go_home: "Go to Home",
    },
    crops: &[
        ("rice", "Rice"),
        ("wheat", "Wheat"),
        ("jute", "Jute"),
        ("potato", "Potato"),
        ("sugarcane", "Sugarcane"),
        ("maize", "Maize"),
        ("vegetables", "Vegetables"),
        ("pulses", "Pulses"),
    ],
    soils: &[
        ("alluvial", "Alluvial"),
        ("clay", "Clay"),
        ("sandy", "Sandy"),
        ("loamy", "Loamy"),
        ("laterite", "Laterite"),
        ("peaty", "Peaty"),
    ],
    weather: &[
        ("sunny", "Sunny"),
        ("rainy", "Rainy"),
        ("cloudy", "Cloudy"),
        ("humid", "Humid"),
        ("dry", "Dry"),
        ("monsoon", "Monsoon"),
    ],
};

static BN: Translations = Translations {
    nav: Nav {
        home: "হোম",
        features: "বৈশিষ্ট্য",
        pricing: "মূল্য",
        dashboard: "ড্যাশবোর্ড",
        login: "লগইন",
        signup: "নিবন্ধন",
        logout: "লগআউট",
        profile: "প্রোফাইল",
        language: "ভাষা",
    },
    landing: Landing {
        badge: "এআই-চালিত কৃষি প্ল্যাটফর্ম",
        hero_title: "কৃত্রিম বুদ্ধিমত্তায় কৃষি বিপ্লব",
        hero_subtitle: "ফসলের ফলন অপ্টিমাইজ করতে, আবহাওয়ার পূর্বাভাস দিতে এবং তথ্য-ভিত্তিক কৃষি সিদ্ধান্ত নিতে কৃত্রিম বুদ্ধিমত্তার শক্তি ব্যবহার করুন।",
        features_title: "আধুনিক কৃষকদের জন্য শক্তিশালী বৈশিষ্ট্য",
        feature_yield: FeatureText {
            title: "এআই ফলন পূর্বাভাস",
            desc: "স্থানীয় কৃষি তথ্যে প্রশিক্ষিত উন্নত মেশিন লার্নিং মডেল ব্যবহার করে সঠিক ফসল ফলনের পূর্বাভাস পান।",
        },
        feature_offline: FeatureText {
            title: "অফলাইন অ্যাক্সেস",
            desc: "ইন্টারনেট ছাড়াও নির্বিঘ্নে কাজ করুন। আপনি পুনরায় সংযোগ করলে সমস্ত ডেটা স্বয়ংক্রিয়ভাবে সিঙ্ক হয়।",
        },
        feature_chat: FeatureText {
            title: "স্মার্ট চ্যাটবট",
            desc: "আমাদের এআই সহকারীর কাছ থেকে বাংলা বা ইংরেজিতে কৃষি প্রশ্নের তাৎক্ষণিক উত্তর পান।",
        },
        feature_dashboard: FeatureText {
            title: "ডেটা ড্যাশবোর্ড",
            desc: "স্যাটেলাইট ছবি, আইওটি সেন্সর ডেটা এবং ঐতিহাসিক প্রবণতা এক জায়গায় দেখুন।",
        },
        stat_farmers: "সক্রিয় কৃষক",
        stat_villages: "গ্রাম কভার করা হয়েছে",
        stat_accuracy: "নির্ভুলতার হার",
        stat_support: "২৪/৭ সাপোর্ট",
        get_started: "বিনামূল্যে শুরু করুন",
        watch_demo: "ডেমো দেখুন",
        cta_title: "আপনার খামার রূপান্তর করতে প্রস্তুত?",
        cta_subtitle: "হাজার হাজার কৃষক যারা ইতিমধ্যে AgriAI Hub ব্যবহার করে তাদের ফলন বাড়াচ্ছে, তাদের সাথে যোগ দিন।",
        start_free: "বিনামূল্যে ট্রায়াল শুরু করুন",
        contact_sales: "বিক্রয়ের সাথে যোগাযোগ করুন",
        offer: "🎉 বিশেষ অফার: প্রথম ৩ মাসের জন্য প্রো প্ল্যানে ৫০% ছাড়!",
        claim_now: "এখনই নিন",
        footer_about: "সম্পর্কে",
        footer_contact: "যোগাযোগ",
        footer_privacy: "গোপনীয়তা নীতি",
        footer_terms: "সেবার শর্তাবলী",
    },
    auth: Auth {
        login_title: "স্বাগতম",
        login_subtitle: "আপনার ড্যাশবোর্ড অ্যাক্সেস করতে সাইন ইন করুন",
        signup_title: "অ্যাকাউন্ট তৈরি করুন",
        signup_subtitle: "আজই আপনার বিনামূল্যে ট্রায়াল শুরু করুন",
        email: "ইমেইল ঠিকানা",
        password: "পাসওয়ার্ড",
        confirm_password: "পাসওয়ার্ড নিশ্চিত করুন",
        name: "পুরো নাম",
        phone: "ফোন নম্বর",
        forgot_password: "পাসওয়ার্ড ভুলে গেছেন?",
        login_button: "সাইন ইন",
        signup_button: "অ্যাকাউন্ট তৈরি করুন",
        welcome_back: "আবার স্বাগতম!",
        account_created: "অ্যাকাউন্ট তৈরি হয়েছে এবং লগইন সম্পন্ন!",
    },
    dashboard: Dashboard {
        welcome: "স্বাগতম",
        subtitle: "আপনার খামার এবং পূর্বাভাস পরিচালনা করুন",
        overview: "সংক্ষিপ্ত বিবরণ",
        ai_predictions: "এআই পূর্বাভাস",
        data_center: "ডেটা সেন্টার",
        soil_analysis: "মাটি বিশ্লেষণ",
        profile: "প্রোফাইল",
        total_farms: "মোট খামার",
        active_predictions: "সক্রিয় পূর্বাভাস",
        last_sync: "শেষ সিঙ্ক",
        just_now: "এইমাত্র",
        free_tier: "বিনামূল্যে স্তর",
        upgrade_pro: "প্রো-তে আপগ্রেড করুন",
        predictions_per_month: "পূর্বাভাস/মাস",
        chat_queries_per_day: "চ্যাট প্রশ্ন/দিন",
        recent_activity: "সাম্প্রতিক কার্যকলাপ",
        yield_prediction_for: "ফলন পূর্বাভাস:",
        new_prediction: "নতুন পূর্বাভাস",
        crop_type: "ফসলের ধরন",
        soil_type: "মাটির ধরন",
        weather_condition: "আবহাওয়ার অবস্থা",
        farm_size: "খামারের আকার",
        select: "নির্বাচন করুন...",
        predict: "ফলন পূর্বাভাস",
        predicting: "বিশ্লেষণ করা হচ্ছে...",
        predicted_yield: "পূর্বাভাসিত ফলন",
        confidence: "আত্মবিশ্বাস",
        recommendations: "সুপারিশ",
        history: "পূর্বাভাসের ইতিহাস",
        sensor_data: "সেন্সর ডেটা",
        date: "তারিখ",
        source: "উৎস",
        temperature: "তাপমাত্রা",
        humidity: "আর্দ্রতা",
        soil_moisture: "মাটির আর্দ্রতা",
        rainfall: "বৃষ্টিপাত",
        sunlight: "সূর্যালোক",
        export: "ডেটা রপ্তানি",
        upload_soil: "মাটির রিপোর্ট আপলোড",
        upload_hint: "মাটির রিপোর্টের ছবি বা পিডিএফ আপলোড করুন",
        analyzing: "বিশ্লেষণ করা হচ্ছে...",
        analysis_results: "বিশ্লেষণের ফলাফল",
        npk_distribution: "এনপিকে বণ্টন",
        nitrogen: "নাইট্রোজেন (N)",
        phosphorus: "ফসফরাস (P)",
        potassium: "পটাসিয়াম (K)",
        ph_level: "পিএইচ স্তর",
        organic_matter: "জৈব পদার্থ",
        personal_info: "ব্যক্তিগত তথ্য",
        save_changes: "পরিবর্তন সংরক্ষণ",
        location: "অবস্থান",
        language_pref: "ভাষা পছন্দ",
        notifications: "বিজ্ঞপ্তি",
        enable_notifications: "বিজ্ঞপ্তি চালু করুন",
        offline: "আপনি অফলাইনে আছেন",
        online: "সংযুক্ত",
    },
    chat: Chat {
        title: "AgriAI সহকারী",
        placeholder: "কৃষি সম্পর্কে আমাকে যেকোনো প্রশ্ন করুন...",
        send: "পাঠান",
        thinking: "চিন্তা করছি...",
        welcome: "নমস্কার! আমি আপনার AgriAI সহকারী। আজ আপনার কৃষি প্রয়োজনে আমি কীভাবে সাহায্য করতে পারি?",
        online: "অনলাইন",
        powered_by: "AgriAI দ্বারা চালিত",
    },
    common: Common {
        loading: "লোড হচ্ছে...",
        error: "কিছু ভুল হয়েছে",
        success: "সফল!",
        cancel: "বাতিল",
        save: "সংরক্ষণ",
        no_data: "কোন তথ্য নেই",
        try_again: "আবার চেষ্টা করুন",
        not_found: "পৃষ্ঠা পাওয়া যায়নি",
        go_home: "হোমে যান",
    },
    crops: &[
        ("rice", "ধান"),
        ("wheat", "গম"),
        ("jute", "পাট"),
        ("potato", "আলু"),
        ("sugarcane", "আখ"),
        ("maize", "ভুট্টা"),
        ("vegetables", "সবজি"),
        ("pulses", "ডাল"),
    ],
    soils: &[
        ("alluvial", "পলিমাটি"),
        ("clay", "কাদামাটি"),
        ("sandy", "বালিমাটি"),
        ("loamy", "দোআঁশ মাটি"),
        ("laterite", "লালমাটি"),
        ("peaty", "পিট মাটি"),
    ],
    weather: &[
        ("sunny", "রৌদ্রোজ্জ্বল"),
        ("rainy", "বৃষ্টি"),
        ("cloudy", "মেঘলা"),
        ("humid", "আর্দ্র"),
        ("dry", "শুষ্ক"),
        ("monsoon", "বর্ষাকাল"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_preference_persists() {
        let store = MemoryStore::new();
        assert_eq!(Language::load(&store), Language::En);

        Language::Bn.save(&store).unwrap();
        assert_eq!(Language::load(&store), Language::Bn);
        assert_eq!(store.get_item(keys::LANGUAGE).unwrap().as_deref(), Some("bn"));
    }

    #[test]
    fn test_unknown_stored_language_defaults() {
        let store = MemoryStore::new();
        store.set_item(keys::LANGUAGE, "klingon").unwrap();
        assert_eq!(Language::load(&store), Language::En);
    }

    #[test]
    fn test_tables_are_parallel() {
        let en = Language::En.translations();
        let bn = Language::Bn.translations();
        let keys_of = |o: Options| o.iter().map(|(k, _)| *k).collect::<Vec<_>>();
        assert_eq!(keys_of(en.crops), keys_of(bn.crops));
        assert_eq!(keys_of(en.soils), keys_of(bn.soils));
        assert_eq!(keys_of(en.weather), keys_of(bn.weather));
        assert_ne!(en.chat.welcome, bn.chat.welcome);
    }

    #[test]
    fn test_option_label() {
        let bn = Language::Bn.translations();
        assert_eq!(option_label(bn.crops, "rice"), "ধান");
        assert_eq!(option_label(bn.crops, "coffee"), "coffee");
    }
}
