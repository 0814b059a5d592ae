//! Localized string table.
//!
//! Each key maps to `(locale code, text)` pairs. A key need not cover every
//! locale; lookups fall back to English.

pub(crate) type Entry = (&'static str, &'static [(&'static str, &'static str)]);

pub(crate) const STRINGS: &[Entry] = &[
    (
        "emailNotConfirmed",
        &[
            ("en", "Please check your email and click the confirmation link to verify your account before signing in."),
            ("hi", "साइन इन करने से पहले कृपया अपना ईमेल चेक करें और अपने खाते को सत्यापित करने के लिए पुष्टिकरण लिंक पर क्लिक करें।"),
            ("mr", "साइन इन करण्यापूर्वी कृपया तुमचा ईमेल तपासा आणि तुमचे खाते सत्यापित करण्यासाठी पुष्टीकरण दुव्यावर क्लिक करा."),
            ("gu", "સાઈન ઈન કરતા પહેલા કૃપા કરીને તમારો ઈમેઈલ તપાસો અને તમારા એકાઉન્ટને ચકાસવા માટે પુષ્ટિકરણ લિંક પર ક્લિક કરો."),
            ("pa", "ਸਾਈਨ ਇਨ ਕਰਨ ਤੋਂ ਪਹਿਲਾਂ ਕਿਰਪਾ ਕਰਕੇ ਆਪਣਾ ਈਮੇਲ ਚੈੱਕ ਕਰੋ ਅਤੇ ਆਪਣੇ ਖਾਤੇ ਨੂੰ ਸਤਿਆਪਿਤ ਕਰਨ ਲਈ ਪੁਸ਼ਟੀਕਰਨ ਲਿੰਕ 'ਤੇ ਕਲਿੱਕ ਕਰੋ।"),
        ],
    ),
    (
        "signInFailed",
        &[
            ("en", "An error occurred during sign in"),
            ("hi", "साइन इन के दौरान एक त्रुटि हुई"),
        ],
    ),
    (
        "signIn",
        &[
            ("en", "Sign In"),
            ("hi", "साइन इन करें"),
            ("mr", "साइन इन करा"),
            ("gu", "સાઇન ઇન કરો"),
            ("pa", "ਸਾਈਨ ਇਨ ਕਰੋ"),
        ],
    ),
    (
        "signUp",
        &[
            ("en", "Sign Up"),
            ("hi", "साइन अप करें"),
            ("mr", "साइन अप करा"),
            ("gu", "સાઇન અપ કરો"),
            ("pa", "ਸਾਈਨ ਅਪ ਕਰੋ"),
        ],
    ),
    (
        "welcome",
        &[
            ("en", "Welcome Back"),
            ("hi", "वापस स्वागत है"),
            ("mr", "परत स्वागत आहे"),
            ("gu", "પાછા સ્વાગત છે"),
            ("pa", "ਵਾਪਸ ਸਵਾਗਤ ਹੈ"),
        ],
    ),
    (
        "listening",
        &[
            ("en", "Listening..."),
            ("hi", "सुन रहा हूं..."),
            ("mr", "ऐकत आहे..."),
            ("gu", "સાંભળી રહ્યું છું..."),
            ("pa", "ਸੁਣ ਰਿਹਾ ਹਾਂ..."),
        ],
    ),
    (
        "askByVoice",
        &[
            ("en", "Ask by Voice"),
            ("hi", "बोलकर पूछें"),
            ("mr", "आवाजाने विचारा"),
            ("gu", "અવાજથી પૂછો"),
            ("pa", "ਆਵਾਜ਼ ਨਾਲ ਪੁੱਛੋ"),
        ],
    ),
    (
        "voiceQueryError",
        &[
            ("en", "Error processing your question. Please try again."),
            ("hi", "आपके सवाल का जवाब देने में त्रुटि हुई। कृपया पुनः प्रयास करें।"),
        ],
    ),
    (
        "quickActionError",
        &[
            ("en", "Error retrieving information. Please try again."),
            ("hi", "जानकारी प्राप्त करने में त्रुटि हुई। कृपया पुनः प्रयास करें।"),
        ],
    ),
    (
        "speechUnsupported",
        &[
            ("en", "Voice input is not available on this device."),
            ("hi", "इस डिवाइस पर वॉइस इनपुट उपलब्ध नहीं है।"),
        ],
    ),
];

/// Appended to every prompt so the model answers in the user's language and
/// without markdown.
pub(crate) const RESPONSE_INSTRUCTIONS: &[(&str, &str)] = &[
    ("en", "Please respond in English in plain text without any markdown formatting, bold text, or special characters."),
    ("hi", "कृपया हिंदी में सादे टेक्स्ट में उत्तर दें, बिना किसी मार्कडाउन फॉर्मेटिंग या विशेष चिह्नों के।"),
    ("mr", "कृपया मराठीत साध्या मजकुरात उत्तर द्या, कोणतेही मार्कडाउन फॉरमॅटिंग किंवा विशेष चिन्हे न वापरता."),
    ("gu", "કૃપા કરીને ગુજરાતીમાં સાદા ટેક્સ્ટમાં જવાબ આપો, કોઈ માર્કડાઉન ફોર્મેટિંગ અથવા વિશેષ ચિહ્નો વિના."),
    ("pa", "ਕਿਰਪਾ ਕਰਕੇ ਪੰਜਾਬੀ ਵਿੱਚ ਸਾਦੇ ਟੈਕਸਟ ਵਿੱਚ ਜਵਾਬ ਦਿਓ, ਬਿਨਾਂ ਕਿਸੇ ਮਾਰਕਡਾਉਨ ਫਾਰਮੈਟਿੰਗ ਜਾਂ ਵਿਸ਼ੇਸ਼ ਚਿੰਨ੍ਹਾਂ ਦੇ।"),
];
