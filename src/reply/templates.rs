//! Compiled-in reply templates.
//!
//! Empathy strings embed their own trailing separator (a space, sometimes an
//! emoji) because the prefix is glued directly onto the core message.

use crate::emotion::Empathy;
use crate::intent::IntentCategory;
use crate::language::LanguageKey;

use Empathy::{Angry, Confused, Fear, Happy, Sad};
use IntentCategory::{Fallback, Greeting, Support, Transaction};
use LanguageKey::{Bengali, English, Hindi, Hinglish, Marathi, Tamil, Telugu};

/// (intent, language, core message)
pub(crate) const CORE_MESSAGES: &[(IntentCategory, LanguageKey, &str)] = &[
    // English
    (Greeting, English, "Hey there! How are you doing today? How can I help you?"),
    (Support, English, "I'm here to help you. Can you please describe your issue?"),
    (Transaction, English, "Let me help you with your order. Can you give me more details?"),
    (Fallback, English, "Thanks for your message! How can I assist you further?"),
    // Hindi
    (Greeting, Hindi, "नमस्ते! आप कैसे हैं? मैं आपकी कैसे मदद कर सकता हूँ?"),
    (Support, Hindi, "मैं आपकी मदद करने के लिए यहाँ हूँ। कृपया अपनी समस्या बताएं।"),
    (Transaction, Hindi, "चलिए मैं आपकी ऑर्डर से जुड़ी मदद करता हूँ। कृपया और जानकारी दें।"),
    (Fallback, Hindi, "आपके संदेश के लिए धन्यवाद! मैं और कैसे मदद कर सकता हूँ?"),
    // Hinglish
    (Greeting, Hinglish, "Hey! Aap kaise ho? Main aapki kaise help kar sakta hoon?"),
    (Support, Hinglish, "Main aapki help ke liye yahan hoon. Please apni problem batayein."),
    (Transaction, Hinglish, "Chaliye main aapke order mein help karta hoon. Thoda aur detail dijiye."),
    (Fallback, Hinglish, "Message ke liye thanks! Main aur kaise help kar sakta hoon?"),
    // Tamil
    (Greeting, Tamil, "வணக்கம்! இன்று எப்படி இருக்கிறீர்கள்? நான் உங்களுக்கு எப்படி உதவ முடியும்?"),
    (Support, Tamil, "உங்களுக்கு உதவ நான் இங்கே இருக்கிறேன். உங்கள் பிரச்சனையை விவரிக்கவும்."),
    (Transaction, Tamil, "உங்கள் ஆர்டருக்கு நான் உதவுகிறேன். மேலும் விவரங்களைத் தர முடியுமா?"),
    (Fallback, Tamil, "உங்கள் செய்திக்கு நன்றி! நான் மேலும் எப்படி உதவ முடியும்?"),
    // Telugu
    (Greeting, Telugu, "నమస్తే! ఈ రోజు మీరు ఎలా ఉన్నారు? నేను మీకు ఎలా సహాయం చేయగలను?"),
    (Support, Telugu, "మీకు సహాయం చేయడానికి నేను ఇక్కడ ఉన్నాను. దయచేసి మీ సమస్యను వివరించండి."),
    (Transaction, Telugu, "మీ ఆర్డర్ విషయంలో నేను సహాయం చేస్తాను. మరిన్ని వివరాలు ఇవ్వగలరా?"),
    (Fallback, Telugu, "మీ సందేశానికి ధన్యవాదాలు! నేను ఇంకా ఎలా సహాయం చేయగలను?"),
    // Bengali
    (Greeting, Bengali, "নমস্কার! আজ আপনি কেমন আছেন? আমি কীভাবে আপনাকে সাহায্য করতে পারি?"),
    (Support, Bengali, "আমি আপনাকে সাহায্য করতে এখানে আছি। অনুগ্রহ করে আপনার সমস্যাটি বলুন।"),
    (Transaction, Bengali, "চলুন আপনার অর্ডার নিয়ে সাহায্য করি। আরও বিস্তারিত জানাবেন?"),
    (Fallback, Bengali, "আপনার বার্তার জন্য ধন্যবাদ! আমি আর কীভাবে সাহায্য করতে পারি?"),
    // Marathi
    (Greeting, Marathi, "नमस्कार! आज तुम्ही कसे आहात? मी तुमची कशी मदत करू शकतो?"),
    (Support, Marathi, "मी तुमच्या मदतीसाठी इथे आहे. कृपया तुमची समस्या सांगा."),
    (Transaction, Marathi, "चला, मी तुमच्या ऑर्डरसाठी मदत करतो. कृपया अधिक माहिती द्या."),
    (Fallback, Marathi, "तुमच्या संदेशाबद्दल धन्यवाद! मी आणखी कशी मदत करू शकतो?"),
];

/// Empathy prefixes for the two-language revision.
pub(crate) const EMPATHY_MINIMAL: &[(Empathy, LanguageKey, &str)] = &[
    (Happy, English, "You seem cheerful! 😊 "),
    (Happy, Hindi, "आप खुश लग रहे हैं! 😊 "),
    (Sad, English, "I'm here for you. "),
    (Sad, Hindi, "मैं आपके साथ हूँ। "),
    (Angry, English, "I'm really sorry you're upset. "),
    (Angry, Hindi, "हमें खेद है कि आप नाराज़ हैं। "),
    (Confused, English, "Let me help clear things up. "),
    (Confused, Hindi, "आइए मैं आपकी उलझन दूर करता हूँ। "),
];

/// Empathy prefixes for the full language selector.
pub(crate) const EMPATHY_EXTENDED: &[(Empathy, LanguageKey, &str)] = &[
    (Happy, English, "You seem cheerful! 😊 "),
    (Happy, Hindi, "आप खुश लग रहे हैं! 😊 "),
    (Happy, Hinglish, "Aap khush lag rahe ho! 😊 "),
    (Happy, Tamil, "நீங்கள் மகிழ்ச்சியாக இருக்கிறீர்கள்! 😊 "),
    (Happy, Telugu, "మీరు సంతోషంగా ఉన్నట్టున్నారు! 😊 "),
    (Happy, Bengali, "আপনাকে খুশি মনে হচ্ছে! 😊 "),
    (Happy, Marathi, "तुम्ही आनंदी दिसत आहात! 😊 "),
    (Sad, English, "I'm here for you. "),
    (Sad, Hindi, "मैं आपके साथ हूँ। "),
    (Sad, Hinglish, "Main aapke saath hoon. "),
    (Sad, Tamil, "நான் உங்களுடன் இருக்கிறேன். "),
    (Sad, Telugu, "నేను మీతో ఉన్నాను. "),
    (Sad, Bengali, "আমি আপনার পাশে আছি। "),
    (Sad, Marathi, "मी तुमच्यासोबत आहे. "),
    (Angry, English, "I'm really sorry you're upset. "),
    (Angry, Hindi, "हमें खेद है कि आप नाराज़ हैं। "),
    (Angry, Hinglish, "Sorry, aap upset ho. "),
    (Angry, Tamil, "நீங்கள் வருத்தமாக இருப்பதற்கு மன்னிக்கவும். "),
    (Angry, Telugu, "మీరు బాధపడినందుకు క్షమించండి. "),
    (Angry, Bengali, "আপনি বিরক্ত হয়েছেন বলে আমি দুঃখিত। "),
    (Angry, Marathi, "तुम्ही नाराज आहात याबद्दल क्षमस्व. "),
    (Fear, English, "It's okay to feel scared. I'm with you. "),
    (Fear, Hindi, "डरना स्वाभाविक है, मैं आपके साथ हूँ। "),
    (Fear, Hinglish, "Darr lagna normal hai, main saath hoon. "),
    (Fear, Tamil, "பயப்பட வேண்டாம், நான் உங்களுடன் இருக்கிறேன். "),
    (Fear, Telugu, "భయపడకండి, నేను మీతో ఉన్నాను. "),
    (Fear, Bengali, "ভয় পাবেন না, আমি আপনার সাথে আছি। "),
    (Fear, Marathi, "घाबरू नका, मी तुमच्यासोबत आहे. "),
];
