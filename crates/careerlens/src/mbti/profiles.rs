use super::{Language, Pole};

/// Display text in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub ml: &'static str,
}

const fn tr(en: &'static str, ml: &'static str) -> Localized {
    Localized { en, ml }
}

impl Localized {
    pub const fn resolve(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.en,
            Language::Malayalam => self.ml,
        }
    }

    /// Resolves a list of localized entries in order.
    pub fn resolve_all(entries: &[Self], language: Language) -> Vec<&'static str> {
        entries.iter().map(|entry| entry.resolve(language)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MbtiProfile {
    pub code: &'static str,
    pub name: Localized,
    pub description: Localized,
    pub strengths: &'static [Localized],
    pub weaknesses: &'static [Localized],
    pub careers: &'static [Localized],
    pub holland_code: &'static str,
}

/// Index of a type in [`PROFILES`]: one bit per axis, second pole set.
pub(super) fn profile_index(poles: [Pole; 4]) -> usize {
    let [ei, sn, tf, jp] = poles;
    (usize::from(ei == Pole::Introversion) << 3)
        | (usize::from(sn == Pole::Intuition) << 2)
        | (usize::from(tf == Pole::Feeling) << 1)
        | usize::from(jp == Pole::Perceiving)
}

pub static PROFILES: [MbtiProfile; 16] = [
    MbtiProfile {
        code: "ESTJ",
        name: tr("The Executive", "ഭരണാധികാരി"),
        description: tr(
            "Organized and decisive, you bring order to people and projects and expect \
             commitments to be honored.",
            "ചിട്ടയും തീരുമാനശേഷിയുമുള്ള നിങ്ങൾ ആളുകളിലും പദ്ധതികളിലും ക്രമം കൊണ്ടുവരുന്നു, ഏറ്റ \
             ഉത്തരവാദിത്തങ്ങൾ പാലിക്കപ്പെടണമെന്ന് പ്രതീക്ഷിക്കുന്നു.",
        ),
        strengths: &[
            tr("Dependable", "ആശ്രയിക്കാവുന്നവർ"),
            tr("Direct", "നേരിട്ട് സംസാരിക്കുന്നവർ"),
            tr("Strong organizer", "മികച്ച സംഘാടകർ"),
        ],
        weaknesses: &[
            tr("Inflexible", "വഴക്കമില്ലായ്മ"),
            tr("Impatient with ambiguity", "അവ്യക്തതയോട് അക്ഷമ"),
            tr("Can seem blunt", "പരുഷമായി തോന്നാം"),
        ],
        careers: &[
            tr("Operations Manager", "ഓപ്പറേഷൻസ് മാനേജർ"),
            tr("Financial Manager", "ധനകാര്യ മാനേജർ"),
            tr("Police Officer", "പോലീസ് ഉദ്യോഗസ്ഥൻ"),
            tr("Judge", "ന്യായാധിപൻ"),
        ],
        holland_code: "ECR",
    },
    MbtiProfile {
        code: "ESTP",
        name: tr("The Entrepreneur", "സംരംഭകൻ"),
        description: tr(
            "Energetic and pragmatic, you learn by doing and thrive when there is a problem to \
             solve right now.",
            "ഊർജ്ജസ്വലരും പ്രായോഗികബുദ്ധിയുള്ളവരുമായ നിങ്ങൾ ചെയ്തുകൊണ്ട് പഠിക്കുന്നു, ഉടനടി \
             പരിഹരിക്കേണ്ട പ്രശ്നങ്ങൾക്കു മുന്നിൽ തിളങ്ങുന്നു.",
        ),
        strengths: &[
            tr("Bold", "ധീരർ"),
            tr("Practical", "പ്രായോഗികർ"),
            tr("Perceptive", "നിരീക്ഷണപാടവമുള്ളവർ"),
        ],
        weaknesses: &[
            tr("Impatient", "അക്ഷമ"),
            tr("Risk-prone", "അപകടസാധ്യതകളിലേക്കുള്ള ചായ്‌വ്"),
            tr("Easily bored by theory", "സിദ്ധാന്തങ്ങൾ പെട്ടെന്ന് മടുക്കും"),
        ],
        careers: &[
            tr("Sales Manager", "സെയിൽസ് മാനേജർ"),
            tr("Paramedic", "പാരാമെഡിക്"),
            tr("Entrepreneur", "സംരംഭകൻ"),
            tr("Construction Manager", "നിർമ്മാണ മാനേജർ"),
        ],
        holland_code: "ERS",
    },
    MbtiProfile {
        code: "ESFJ",
        name: tr("The Consul", "ആതിഥേയൻ"),
        description: tr(
            "Warm and conscientious, you look after the people around you and keep communities \
             running smoothly.",
            "സ്നേഹവും കർത്തവ്യബോധവുമുള്ള നിങ്ങൾ ചുറ്റുമുള്ളവരെ പരിപാലിക്കുകയും സമൂഹങ്ങളെ സുഗമമായി \
             മുന്നോട്ടു നയിക്കുകയും ചെയ്യുന്നു.",
        ),
        strengths: &[
            tr("Caring", "കരുതലുള്ളവർ"),
            tr("Loyal", "വിശ്വസ്തർ"),
            tr("Well organized", "ചിട്ടയുള്ളവർ"),
        ],
        weaknesses: &[
            tr("Needs approval", "അംഗീകാരം ആഗ്രഹിക്കുന്നു"),
            tr("Avoids conflict", "സംഘർഷം ഒഴിവാക്കുന്നു"),
            tr("Sensitive to criticism", "വിമർശനത്തോട് സംവേദനക്ഷമത"),
        ],
        careers: &[
            tr("Nurse", "നഴ്സ്"),
            tr("Teacher", "അധ്യാപകൻ"),
            tr("Human Resources Specialist", "മാനവവിഭവശേഷി വിദഗ്ധൻ"),
            tr("Event Planner", "ഇവന്റ് പ്ലാനർ"),
        ],
        holland_code: "SEC",
    },
    MbtiProfile {
        code: "ESFP",
        name: tr("The Entertainer", "വിനോദകൻ"),
        description: tr(
            "Spontaneous and lively, you bring energy to every room and enjoy sharing experiences \
             with others.",
            "സ്വാഭാവികതയും ചുറുചുറുക്കുമുള്ള നിങ്ങൾ ഓരോ മുറിയിലും ഊർജ്ജം നിറയ്ക്കുകയും അനുഭവങ്ങൾ \
             മറ്റുള്ളവരുമായി പങ്കിടുന്നത് ആസ്വദിക്കുകയും ചെയ്യുന്നു.",
        ),
        strengths: &[
            tr("Enthusiastic", "ഉത്സാഹികൾ"),
            tr("Observant", "നിരീക്ഷണശീലർ"),
            tr("Good with people", "ആളുകളുമായി നന്നായി ഇടപഴകുന്നവർ"),
        ],
        weaknesses: &[
            tr("Dislikes planning", "ആസൂത്രണം ഇഷ്ടമല്ല"),
            tr("Easily distracted", "പെട്ടെന്ന് ശ്രദ്ധ തെറ്റുന്നു"),
            tr("Avoids hard conversations", "കഠിനമായ സംഭാഷണങ്ങൾ ഒഴിവാക്കുന്നു"),
        ],
        careers: &[
            tr("Actor", "നടൻ"),
            tr("Tour Guide", "ടൂർ ഗൈഡ്"),
            tr("Fitness Trainer", "ഫിറ്റ്നസ് പരിശീലകൻ"),
            tr("Flight Attendant", "ഫ്ലൈറ്റ് അറ്റൻഡന്റ്"),
        ],
        holland_code: "SAE",
    },
    MbtiProfile {
        code: "ENTJ",
        name: tr("The Commander", "നേതാവ്"),
        description: tr(
            "Strategic and assertive, you set ambitious goals and organize people and resources \
             to reach them.",
            "തന്ത്രജ്ഞരും ദൃഢനിശ്ചയമുള്ളവരുമായ നിങ്ങൾ വലിയ ലക്ഷ്യങ്ങൾ വെക്കുകയും അവ നേടാൻ \
             ആളുകളെയും വിഭവങ്ങളെയും സംഘടിപ്പിക്കുകയും ചെയ്യുന്നു.",
        ),
        strengths: &[
            tr("Efficient", "കാര്യക്ഷമർ"),
            tr("Confident", "ആത്മവിശ്വാസമുള്ളവർ"),
            tr("Strategic", "തന്ത്രജ്ഞർ"),
        ],
        weaknesses: &[
            tr("Domineering", "ആധിപത്യ സ്വഭാവം"),
            tr("Intolerant of inefficiency", "കാര്യക്ഷമതയില്ലായ്മയോട് അസഹിഷ്ണുത"),
            tr("Impatient", "അക്ഷമ"),
        ],
        careers: &[
            tr("Chief Executive", "ചീഫ് എക്സിക്യൂട്ടീവ്"),
            tr("Management Consultant", "മാനേജ്മെന്റ് കൺസൾട്ടന്റ്"),
            tr("Lawyer", "അഭിഭാഷകൻ"),
            tr("Product Manager", "പ്രോഡക്റ്റ് മാനേജർ"),
        ],
        holland_code: "EIC",
    },
    MbtiProfile {
        code: "ENTP",
        name: tr("The Debater", "വാദപ്രതിവാദി"),
        description: tr(
            "Quick-witted and inventive, you enjoy challenging assumptions and exploring ideas \
             from every angle.",
            "ചുറുചുറുക്കുള്ള ബുദ്ധിയും കണ്ടുപിടിത്തശേഷിയുമുള്ള നിങ്ങൾ ധാരണകളെ ചോദ്യം ചെയ്യാനും \
             ആശയങ്ങളെ എല്ലാ കോണുകളിൽനിന്നും പരിശോധിക്കാനും ഇഷ്ടപ്പെടുന്നു.",
        ),
        strengths: &[
            tr("Original", "മൗലികർ"),
            tr("Knowledgeable", "അറിവുള്ളവർ"),
            tr("Energetic thinker", "ഊർജ്ജസ്വലമായ ചിന്ത"),
        ],
        weaknesses: &[
            tr("Argumentative", "തർക്കസ്വഭാവം"),
            tr("Dislikes routine", "പതിവുകൾ ഇഷ്ടമല്ല"),
            tr("Leaves projects unfinished", "പദ്ധതികൾ പാതിവഴിയിൽ ഉപേക്ഷിക്കുന്നു"),
        ],
        careers: &[
            tr("Entrepreneur", "സംരംഭകൻ"),
            tr("Marketing Manager", "മാർക്കറ്റിംഗ് മാനേജർ"),
            tr("Software Architect", "സോഫ്റ്റ്‌വെയർ ആർക്കിടെക്റ്റ്"),
            tr("Journalist", "പത്രപ്രവർത്തകൻ"),
        ],
        holland_code: "EIA",
    },
    MbtiProfile {
        code: "ENFJ",
        name: tr("The Protagonist", "പ്രചോദകൻ"),
        description: tr(
            "Charismatic and empathetic, you inspire others and help them grow toward their \
             potential.",
            "ആകർഷണീയതയും സഹാനുഭൂതിയുമുള്ള നിങ്ങൾ മറ്റുള്ളവരെ പ്രചോദിപ്പിക്കുകയും അവരുടെ \
             കഴിവുകളിലേക്ക് വളരാൻ സഹായിക്കുകയും ചെയ്യുന്നു.",
        ),
        strengths: &[
            tr("Inspiring", "പ്രചോദനം നൽകുന്നവർ"),
            tr("Reliable", "വിശ്വാസയോഗ്യർ"),
            tr("Altruistic", "പരോപകാരികൾ"),
        ],
        weaknesses: &[
            tr("Overly idealistic", "അമിത ആദർശവാദം"),
            tr("Takes on too much", "അമിതഭാരം ഏറ്റെടുക്കുന്നു"),
            tr("Self-sacrificing", "സ്വയം ത്യജിക്കുന്ന പ്രവണത"),
        ],
        careers: &[
            tr("Teacher", "അധ്യാപകൻ"),
            tr("Counselor", "കൗൺസിലർ"),
            tr("Training Manager", "പരിശീലന മാനേജർ"),
            tr("Public Relations Specialist", "പബ്ലിക് റിലേഷൻസ് വിദഗ്ധൻ"),
        ],
        holland_code: "SEA",
    },
    MbtiProfile {
        code: "ENFP",
        name: tr("The Campaigner", "പ്രചാരകൻ"),
        description: tr(
            "Curious and enthusiastic, you see possibilities everywhere and connect easily with \
             new people.",
            "ജിജ്ഞാസയും ഉത്സാഹവുമുള്ള നിങ്ങൾ എല്ലായിടത്തും സാധ്യതകൾ കാണുകയും പുതിയ ആളുകളുമായി \
             എളുപ്പത്തിൽ അടുക്കുകയും ചെയ്യുന്നു.",
        ),
        strengths: &[
            tr("Creative", "സർഗ്ഗാത്മകർ"),
            tr("Sociable", "സൗഹൃദപ്രിയർ"),
            tr("Optimistic", "ശുഭാപ്തിവിശ്വാസികൾ"),
        ],
        weaknesses: &[
            tr("Disorganized", "ചിട്ടയില്ലായ്മ"),
            tr("Overthinks", "അമിതമായി ചിന്തിക്കുന്നു"),
            tr("Struggles with follow-through", "തുടങ്ങിയത് പൂർത്തിയാക്കാൻ പ്രയാസം"),
        ],
        careers: &[
            tr("Copywriter", "കോപ്പിറൈറ്റർ"),
            tr("Psychologist", "മനഃശാസ്ത്രജ്ഞൻ"),
            tr("Art Director", "ആർട്ട് ഡയറക്ടർ"),
            tr("Social Worker", "സാമൂഹിക പ്രവർത്തകൻ"),
        ],
        holland_code: "ASE",
    },
    MbtiProfile {
        code: "ISTJ",
        name: tr("The Logistician", "കാര്യനിർവാഹകൻ"),
        description: tr(
            "Responsible and thorough, you value facts, procedures, and doing a job right the \
             first time.",
            "ഉത്തരവാദിത്തബോധവും സൂക്ഷ്മതയുമുള്ള നിങ്ങൾ വസ്തുതകൾക്കും നടപടിക്രമങ്ങൾക്കും ആദ്യതവണ \
             തന്നെ ജോലി ശരിയായി ചെയ്യുന്നതിനും വില കൽപ്പിക്കുന്നു.",
        ),
        strengths: &[
            tr("Honest", "സത്യസന്ധർ"),
            tr("Methodical", "ക്രമബദ്ധർ"),
            tr("Responsible", "ഉത്തരവാദിത്തമുള്ളവർ"),
        ],
        weaknesses: &[
            tr("Stubborn", "പിടിവാശി"),
            tr("Resistant to change", "മാറ്റത്തോടുള്ള എതിർപ്പ്"),
            tr("Judgmental", "വിധിയെഴുതുന്ന പ്രവണത"),
        ],
        careers: &[
            tr("Accountant", "അക്കൗണ്ടന്റ്"),
            tr("Auditor", "ഓഡിറ്റർ"),
            tr("Database Administrator", "ഡാറ്റാബേസ് അഡ്മിനിസ്ട്രേറ്റർ"),
            tr("Logistics Analyst", "ലോജിസ്റ്റിക്സ് അനലിസ്റ്റ്"),
        ],
        holland_code: "CRI",
    },
    MbtiProfile {
        code: "ISTP",
        name: tr("The Virtuoso", "വിദഗ്ധൻ"),
        description: tr(
            "Calm and hands-on, you like to understand how things work and fix them with your own \
             hands.",
            "ശാന്തരും പ്രായോഗികരുമായ നിങ്ങൾ കാര്യങ്ങൾ എങ്ങനെ പ്രവർത്തിക്കുന്നുവെന്ന് \
             മനസ്സിലാക്കാനും സ്വന്തം കൈകൊണ്ട് അവ ശരിയാക്കാനും ഇഷ്ടപ്പെടുന്നു.",
        ),
        strengths: &[
            tr("Practical", "പ്രായോഗികർ"),
            tr("Composed in a crisis", "പ്രതിസന്ധിയിലും സമചിത്തർ"),
            tr("Resourceful", "വിഭവശേഷിയുള്ളവർ"),
        ],
        weaknesses: &[
            tr("Private", "സ്വകാര്യത ഇഷ്ടപ്പെടുന്നവർ"),
            tr("Easily bored", "പെട്ടെന്ന് മടുക്കും"),
            tr("Insensitive at times", "ചിലപ്പോൾ സംവേദനക്ഷമതയില്ലായ്മ"),
        ],
        careers: &[
            tr("Mechanical Engineer", "മെക്കാനിക്കൽ എഞ്ചിനീയർ"),
            tr("Electrician", "ഇലക്ട്രീഷ്യൻ"),
            tr("Pilot", "പൈലറ്റ്"),
            tr("Forensic Scientist", "ഫോറൻസിക് ശാസ്ത്രജ്ഞൻ"),
        ],
        holland_code: "RIC",
    },
    MbtiProfile {
        code: "ISFJ",
        name: tr("The Defender", "സംരക്ഷകൻ"),
        description: tr(
            "Dedicated and warm, you protect the people you care about and take your duties \
             seriously.",
            "അർപ്പണബോധവും സ്നേഹവുമുള്ള നിങ്ങൾ പ്രിയപ്പെട്ടവരെ സംരക്ഷിക്കുകയും കടമകൾ ഗൗരവത്തോടെ \
             കാണുകയും ചെയ്യുന്നു.",
        ),
        strengths: &[
            tr("Supportive", "പിന്തുണ നൽകുന്നവർ"),
            tr("Patient", "ക്ഷമാശീലർ"),
            tr("Detail-oriented", "വിശദാംശങ്ങളിൽ ശ്രദ്ധയുള്ളവർ"),
        ],
        weaknesses: &[
            tr("Overly humble", "അമിത വിനയം"),
            tr("Reluctant to change", "മാറ്റത്തോട് വിമുഖത"),
            tr("Takes things personally", "കാര്യങ്ങൾ വ്യക്തിപരമായി എടുക്കുന്നു"),
        ],
        careers: &[
            tr("Nurse", "നഴ്സ്"),
            tr("Librarian", "ലൈബ്രേറിയൻ"),
            tr("Administrative Assistant", "അഡ്മിനിസ്ട്രേറ്റീവ് അസിസ്റ്റന്റ്"),
            tr("Dental Hygienist", "ഡെന്റൽ ഹൈജീനിസ്റ്റ്"),
        ],
        holland_code: "SCR",
    },
    MbtiProfile {
        code: "ISFP",
        name: tr("The Adventurer", "കലാകാരൻ"),
        description: tr(
            "Gentle and artistic, you live in the moment and express yourself through what you \
             create.",
            "സൗമ്യരും കലാബോധമുള്ളവരുമായ നിങ്ങൾ ഈ നിമിഷത്തിൽ ജീവിക്കുകയും നിങ്ങൾ \
             സൃഷ്ടിക്കുന്നവയിലൂടെ സ്വയം ആവിഷ്കരിക്കുകയും ചെയ്യുന്നു.",
        ),
        strengths: &[
            tr("Artistic", "കലാബോധമുള്ളവർ"),
            tr("Sensitive", "സംവേദനശീലർ"),
            tr("Flexible", "വഴക്കമുള്ളവർ"),
        ],
        weaknesses: &[
            tr("Fiercely independent", "കടുത്ത സ്വാതന്ത്ര്യബോധം"),
            tr("Unpredictable", "പ്രവചനാതീതർ"),
            tr("Easily stressed", "പെട്ടെന്ന് സമ്മർദ്ദത്തിലാകുന്നു"),
        ],
        careers: &[
            tr("Graphic Designer", "ഗ്രാഫിക് ഡിസൈനർ"),
            tr("Photographer", "ഫോട്ടോഗ്രാഫർ"),
            tr("Chef", "പാചകവിദഗ്ധൻ"),
            tr("Veterinary Technician", "വെറ്ററിനറി ടെക്നീഷ്യൻ"),
        ],
        holland_code: "ARS",
    },
    MbtiProfile {
        code: "INTJ",
        name: tr("The Architect", "ആസൂത്രകൻ"),
        description: tr(
            "Independent and analytical, you build long-range plans and improve systems others \
             take for granted.",
            "സ്വതന്ത്രരും വിശകലനശേഷിയുള്ളവരുമായ നിങ്ങൾ ദീർഘകാല പദ്ധതികൾ രൂപപ്പെടുത്തുകയും \
             മറ്റുള്ളവർ നിസ്സാരമായി കാണുന്ന സംവിധാനങ്ങൾ മെച്ചപ്പെടുത്തുകയും ചെയ്യുന്നു.",
        ),
        strengths: &[
            tr("Strategic", "തന്ത്രജ്ഞർ"),
            tr("Determined", "നിശ്ചയദാർഢ്യമുള്ളവർ"),
            tr("Independent", "സ്വതന്ത്രർ"),
        ],
        weaknesses: &[
            tr("Arrogant", "അഹങ്കാരം"),
            tr("Dismissive of emotion", "വികാരങ്ങളെ അവഗണിക്കുന്നു"),
            tr("Overly critical", "അമിത വിമർശനം"),
        ],
        careers: &[
            tr("Data Scientist", "ഡാറ്റ സയന്റിസ്റ്റ്"),
            tr("Systems Analyst", "സിസ്റ്റംസ് അനലിസ്റ്റ്"),
            tr("Architect", "വാസ്തുശില്പി"),
            tr("Economist", "സാമ്പത്തിക ശാസ്ത്രജ്ഞൻ"),
        ],
        holland_code: "ICR",
    },
    MbtiProfile {
        code: "INTP",
        name: tr("The Logician", "ചിന്തകൻ"),
        description: tr(
            "Inventive and analytical, you look for logical explanations and love theoretical \
             puzzles.",
            "കണ്ടുപിടിത്തശേഷിയും വിശകലനബുദ്ധിയുമുള്ള നിങ്ങൾ യുക്തിസഹമായ വിശദീകരണങ്ങൾ തേടുകയും \
             സൈദ്ധാന്തിക പ്രഹേളികകൾ ഇഷ്ടപ്പെടുകയും ചെയ്യുന്നു.",
        ),
        strengths: &[
            tr("Analytical", "വിശകലനശേഷിയുള്ളവർ"),
            tr("Original", "മൗലികർ"),
            tr("Open-minded", "തുറന്ന മനസ്സുള്ളവർ"),
        ],
        weaknesses: &[
            tr("Absent-minded", "മറവി"),
            tr("Insensitive", "സംവേദനക്ഷമതക്കുറവ്"),
            tr("Perfectionist", "പൂർണ്ണതാവാദം"),
        ],
        careers: &[
            tr("Software Developer", "സോഫ്റ്റ്‌വെയർ ഡെവലപ്പർ"),
            tr("Mathematician", "ഗണിതശാസ്ത്രജ്ഞൻ"),
            tr("Research Scientist", "ഗവേഷണ ശാസ്ത്രജ്ഞൻ"),
            tr("Philosopher", "തത്വചിന്തകൻ"),
        ],
        holland_code: "IAR",
    },
    MbtiProfile {
        code: "INFJ",
        name: tr("The Advocate", "ഉപദേഷ്ടാവ്"),
        description: tr(
            "Insightful and principled, you seek meaning in relationships and work toward a \
             vision of a better world.",
            "ഉൾക്കാഴ്ചയും തത്വദീക്ഷയുമുള്ള നിങ്ങൾ ബന്ധങ്ങളിൽ അർത്ഥം തേടുകയും മെച്ചപ്പെട്ട \
             ലോകമെന്ന കാഴ്ചപ്പാടിനായി പ്രവർത്തിക്കുകയും ചെയ്യുന്നു.",
        ),
        strengths: &[
            tr("Insightful", "ഉൾക്കാഴ്ചയുള്ളവർ"),
            tr("Principled", "തത്വനിഷ്ഠർ"),
            tr("Compassionate", "കാരുണ്യമുള്ളവർ"),
        ],
        weaknesses: &[
            tr("Sensitive to criticism", "വിമർശനത്തോട് സംവേദനക്ഷമത"),
            tr("Private", "സ്വകാര്യത ഇഷ്ടപ്പെടുന്നവർ"),
            tr("Prone to burnout", "തളർച്ചയ്ക്കുള്ള സാധ്യത"),
        ],
        careers: &[
            tr("Psychologist", "മനഃശാസ്ത്രജ്ഞൻ"),
            tr("Counselor", "കൗൺസിലർ"),
            tr("Writer", "എഴുത്തുകാരൻ"),
            tr("Nonprofit Director", "സന്നദ്ധസംഘടനാ ഡയറക്ടർ"),
        ],
        holland_code: "SIA",
    },
    MbtiProfile {
        code: "INFP",
        name: tr("The Mediator", "മധ്യസ്ഥൻ"),
        description: tr(
            "Idealistic and empathetic, you are guided by your values and look for the good in \
             people and events.",
            "ആദർശവാദികളും സഹാനുഭൂതിയുള്ളവരുമായ നിങ്ങൾ സ്വന്തം മൂല്യങ്ങളാൽ നയിക്കപ്പെടുകയും \
             ആളുകളിലും സംഭവങ്ങളിലും നന്മ തേടുകയും ചെയ്യുന്നു.",
        ),
        strengths: &[
            tr("Empathetic", "സഹാനുഭൂതിയുള്ളവർ"),
            tr("Creative", "സർഗ്ഗാത്മകർ"),
            tr("Open-minded", "തുറന്ന മനസ്സുള്ളവർ"),
        ],
        weaknesses: &[
            tr("Unrealistic", "യാഥാർത്ഥ്യബോധക്കുറവ്"),
            tr("Self-isolating", "സ്വയം ഒറ്റപ്പെടുന്ന പ്രവണത"),
            tr("Impractical", "പ്രായോഗികതക്കുറവ്"),
        ],
        careers: &[
            tr("Writer", "എഴുത്തുകാരൻ"),
            tr("Counselor", "കൗൺസിലർ"),
            tr("Graphic Designer", "ഗ്രാഫിക് ഡിസൈനർ"),
            tr("Librarian", "ലൈബ്രേറിയൻ"),
        ],
        holland_code: "ASI",
    },
];
