//! The IPIP-NEO-120 item bank.
//!
//! Items cycle through the facets in `N, E, O, A, C` order, four rounds of
//! thirty, so every facet has exactly four items and every domain 24.

use super::domain::{Domain, Item, Keying};

use Domain::{Agreeableness, Conscientiousness, Extraversion, Neuroticism, Openness};
use Keying::{Negative, Positive};

pub const ITEM_COUNT: usize = 120;

const fn item(
    id: &'static str,
    text: &'static str,
    text_ml: &'static str,
    domain: Domain,
    facet: u8,
    keyed: Keying,
) -> Item {
    Item {
        id,
        text,
        text_ml,
        domain,
        facet,
        keyed,
    }
}

pub static IPIP_NEO_120: [Item; ITEM_COUNT] = [
    item(
        "1",
        "Worry about things",
        "കാര്യങ്ങളെക്കുറിച്ച് ആശങ്കപ്പെടാറുണ്ട്",
        Neuroticism,
        1,
        Positive,
    ),
    item(
        "2",
        "Make friends easily",
        "എളുപ്പത്തിൽ സുഹൃത്തുക്കളെ ഉണ്ടാക്കുന്നു",
        Extraversion,
        1,
        Positive,
    ),
    item("3", "Have a vivid imagination", "ഉജ്ജ്വലമായ ഭാവനയുണ്ട്", Openness, 1, Positive),
    item("4", "Trust others", "മറ്റുള്ളവരെ വിശ്വസിക്കുന്നു", Agreeableness, 1, Positive),
    item(
        "5",
        "Complete tasks successfully",
        "ജോലികൾ വിജയകരമായി പൂർത്തിയാക്കുന്നു",
        Conscientiousness,
        1,
        Positive,
    ),
    item("6", "Get angry easily", "എളുപ്പത്തിൽ ദേഷ്യം വരുന്നു", Neuroticism, 2, Positive),
    item("7", "Love large parties", "വലിയ ആഘോഷങ്ങൾ ഇഷ്ടമാണ്", Extraversion, 2, Positive),
    item(
        "8",
        "Believe in the importance of art",
        "കലയുടെ പ്രാധാന്യത്തിൽ വിശ്വസിക്കുന്നു",
        Openness,
        2,
        Positive,
    ),
    item(
        "9",
        "Use others for my own ends",
        "സ്വന്തം നേട്ടത്തിനായി മറ്റുള്ളവരെ ഉപയോഗിക്കുന്നു",
        Agreeableness,
        2,
        Negative,
    ),
    item(
        "10",
        "Like to tidy up",
        "കാര്യങ്ങൾ അടുക്കിവയ്ക്കാൻ ഇഷ്ടമാണ്",
        Conscientiousness,
        2,
        Positive,
    ),
    item("11", "Often feel blue", "പലപ്പോഴും വിഷാദം തോന്നുന്നു", Neuroticism, 3, Positive),
    item("12", "Take charge", "നേതൃത്വം ഏറ്റെടുക്കുന്നു", Extraversion, 3, Positive),
    item(
        "13",
        "Experience my emotions intensely",
        "വികാരങ്ങൾ തീവ്രമായി അനുഭവിക്കുന്നു",
        Openness,
        3,
        Positive,
    ),
    item(
        "14",
        "Love to help others",
        "മറ്റുള്ളവരെ സഹായിക്കാൻ ഇഷ്ടമാണ്",
        Agreeableness,
        3,
        Positive,
    ),
    item("15", "Keep my promises", "വാഗ്ദാനങ്ങൾ പാലിക്കുന്നു", Conscientiousness, 3, Positive),
    item(
        "16",
        "Find it difficult to approach others",
        "മറ്റുള്ളവരെ സമീപിക്കാൻ ബുദ്ധിമുട്ട് തോന്നുന്നു",
        Neuroticism,
        4,
        Positive,
    ),
    item("17", "Am always busy", "എപ്പോഴും തിരക്കിലാണ്", Extraversion, 4, Positive),
    item(
        "18",
        "Prefer variety to routine",
        "പതിവിനേക്കാൾ വൈവിധ്യം ഇഷ്ടപ്പെടുന്നു",
        Openness,
        4,
        Positive,
    ),
    item("19", "Love a good fight", "നല്ലൊരു വഴക്ക് ഇഷ്ടമാണ്", Agreeableness, 4, Negative),
    item("20", "Work hard", "കഠിനാധ്വാനം ചെയ്യുന്നു", Conscientiousness, 4, Positive),
    item("21", "Go on binges", "അമിതമായി മുഴുകിപ്പോകാറുണ്ട്", Neuroticism, 5, Positive),
    item("22", "Love excitement", "ആവേശം ഇഷ്ടമാണ്", Extraversion, 5, Positive),
    item(
        "23",
        "Love to read challenging material",
        "വെല്ലുവിളി നിറഞ്ഞ വായന ഇഷ്ടമാണ്",
        Openness,
        5,
        Positive,
    ),
    item(
        "24",
        "Believe that I am better than others",
        "ഞാൻ മറ്റുള്ളവരെക്കാൾ മെച്ചമാണെന്ന് വിശ്വസിക്കുന്നു",
        Agreeableness,
        5,
        Negative,
    ),
    item("25", "Am always prepared", "എപ്പോഴും തയ്യാറായിരിക്കും", Conscientiousness, 5, Positive),
    item("26", "Panic easily", "എളുപ്പത്തിൽ പരിഭ്രമിക്കുന്നു", Neuroticism, 6, Positive),
    item("27", "Radiate joy", "സന്തോഷം പ്രസരിപ്പിക്കുന്നു", Extraversion, 6, Positive),
    item(
        "28",
        "Tend to vote for liberal political candidates",
        "ഉദാരവാദ രാഷ്ട്രീയ സ്ഥാനാർത്ഥികൾക്ക് വോട്ട് ചെയ്യാറുണ്ട്",
        Openness,
        6,
        Positive,
    ),
    item(
        "29",
        "Sympathize with the homeless",
        "വീടില്ലാത്തവരോട് സഹതാപം തോന്നുന്നു",
        Agreeableness,
        6,
        Positive,
    ),
    item(
        "30",
        "Jump into things without thinking",
        "ആലോചിക്കാതെ കാര്യങ്ങളിലേക്ക് എടുത്തുചാടുന്നു",
        Conscientiousness,
        6,
        Negative,
    ),
    item(
        "31",
        "Fear for the worst",
        "ഏറ്റവും മോശമായത് സംഭവിക്കുമെന്ന് ഭയപ്പെടുന്നു",
        Neuroticism,
        1,
        Positive,
    ),
    item(
        "32",
        "Feel comfortable around people",
        "ആളുകൾക്കിടയിൽ സുഖമായി തോന്നുന്നു",
        Extraversion,
        1,
        Positive,
    ),
    item(
        "33",
        "Enjoy wild flights of fantasy",
        "അതിരില്ലാത്ത സങ്കൽപ്പങ്ങളിൽ രസിക്കുന്നു",
        Openness,
        1,
        Positive,
    ),
    item(
        "34",
        "Believe that others have good intentions",
        "മറ്റുള്ളവർക്ക് നല്ല ഉദ്ദേശ്യമാണെന്ന് വിശ്വസിക്കുന്നു",
        Agreeableness,
        1,
        Positive,
    ),
    item(
        "35",
        "Excel in what I do",
        "ചെയ്യുന്നതിൽ മികവ് പുലർത്തുന്നു",
        Conscientiousness,
        1,
        Positive,
    ),
    item("36", "Get irritated easily", "എളുപ്പത്തിൽ അലോസരം തോന്നുന്നു", Neuroticism, 2, Positive),
    item(
        "37",
        "Talk to a lot of different people at parties",
        "ആഘോഷങ്ങളിൽ പല ആളുകളോടും സംസാരിക്കുന്നു",
        Extraversion,
        2,
        Positive,
    ),
    item(
        "38",
        "See beauty in things that others might not notice",
        "മറ്റുള്ളവർ ശ്രദ്ധിക്കാത്തവയിലും സൗന്ദര്യം കാണുന്നു",
        Openness,
        2,
        Positive,
    ),
    item("39", "Cheat to get ahead", "മുന്നേറാൻ വഞ്ചന കാണിക്കുന്നു", Agreeableness, 2, Negative),
    item(
        "40",
        "Often forget to put things back in their proper place",
        "സാധനങ്ങൾ യഥാസ്ഥാനത്ത് തിരികെ വയ്ക്കാൻ പലപ്പോഴും മറക്കുന്നു",
        Conscientiousness,
        2,
        Negative,
    ),
    item("41", "Dislike myself", "എന്നെത്തന്നെ ഇഷ്ടമല്ല", Neuroticism, 3, Positive),
    item(
        "42",
        "Try to lead others",
        "മറ്റുള്ളവരെ നയിക്കാൻ ശ്രമിക്കുന്നു",
        Extraversion,
        3,
        Positive,
    ),
    item(
        "43",
        "Feel others' emotions",
        "മറ്റുള്ളവരുടെ വികാരങ്ങൾ അനുഭവിക്കുന്നു",
        Openness,
        3,
        Positive,
    ),
    item(
        "44",
        "Am concerned about others",
        "മറ്റുള്ളവരെക്കുറിച്ച് കരുതലുണ്ട്",
        Agreeableness,
        3,
        Positive,
    ),
    item("45", "Tell the truth", "സത്യം പറയുന്നു", Conscientiousness, 3, Positive),
    item(
        "46",
        "Am afraid to draw attention to myself",
        "ശ്രദ്ധ എന്നിലേക്ക് ആകർഷിക്കാൻ ഭയമാണ്",
        Neuroticism,
        4,
        Positive,
    ),
    item("47", "Am always on the go", "എപ്പോഴും ഓടിനടക്കുന്നു", Extraversion, 4, Positive),
    item(
        "48",
        "Prefer to stick with things that I know",
        "പരിചയമുള്ള കാര്യങ്ങളിൽ തുടരാൻ ഇഷ്ടപ്പെടുന്നു",
        Openness,
        4,
        Negative,
    ),
    item("49", "Yell at people", "ആളുകളോട് ഒച്ചയിടുന്നു", Agreeableness, 4, Negative),
    item(
        "50",
        "Do more than what's expected of me",
        "പ്രതീക്ഷിക്കുന്നതിലും കൂടുതൽ ചെയ്യുന്നു",
        Conscientiousness,
        4,
        Positive,
    ),
    item(
        "51",
        "Rarely overindulge",
        "അപൂർവമായേ അമിതമായി ആസ്വദിക്കാറുള്ളൂ",
        Neuroticism,
        5,
        Negative,
    ),
    item("52", "Seek adventure", "സാഹസികത തേടുന്നു", Extraversion, 5, Positive),
    item(
        "53",
        "Avoid philosophical discussions",
        "തത്വചിന്താപരമായ ചർച്ചകൾ ഒഴിവാക്കുന്നു",
        Openness,
        5,
        Negative,
    ),
    item(
        "54",
        "Think highly of myself",
        "എന്നെക്കുറിച്ച് ഉയർന്ന മതിപ്പുണ്ട്",
        Agreeableness,
        5,
        Negative,
    ),
    item("55", "Carry out my plans", "പദ്ധതികൾ നടപ്പിലാക്കുന്നു", Conscientiousness, 5, Positive),
    item(
        "56",
        "Become overwhelmed by events",
        "സംഭവങ്ങൾക്ക് മുന്നിൽ പതറിപ്പോകുന്നു",
        Neuroticism,
        6,
        Positive,
    ),
    item("57", "Have a lot of fun", "ധാരാളം രസിക്കുന്നു", Extraversion, 6, Positive),
    item(
        "58",
        "Believe that there is no absolute right or wrong",
        "കേവലമായ ശരിയോ തെറ്റോ ഇല്ലെന്ന് വിശ്വസിക്കുന്നു",
        Openness,
        6,
        Positive,
    ),
    item(
        "59",
        "Feel sympathy for those who are worse off than myself",
        "എന്നേക്കാൾ മോശം അവസ്ഥയിലുള്ളവരോട് സഹതാപം തോന്നുന്നു",
        Agreeableness,
        6,
        Positive,
    ),
    item(
        "60",
        "Make rash decisions",
        "തിടുക്കത്തിൽ തീരുമാനങ്ങളെടുക്കുന്നു",
        Conscientiousness,
        6,
        Negative,
    ),
    item("61", "Am afraid of many things", "പല കാര്യങ്ങളെയും ഭയമാണ്", Neuroticism, 1, Positive),
    item(
        "62",
        "Avoid contacts with others",
        "മറ്റുള്ളവരുമായുള്ള സമ്പർക്കം ഒഴിവാക്കുന്നു",
        Extraversion,
        1,
        Negative,
    ),
    item("63", "Love to daydream", "പകൽക്കിനാവ് കാണാൻ ഇഷ്ടമാണ്", Openness, 1, Positive),
    item(
        "64",
        "Trust what people say",
        "ആളുകൾ പറയുന്നത് വിശ്വസിക്കുന്നു",
        Agreeableness,
        1,
        Positive,
    ),
    item(
        "65",
        "Handle tasks smoothly",
        "ജോലികൾ സുഗമമായി കൈകാര്യം ചെയ്യുന്നു",
        Conscientiousness,
        1,
        Positive,
    ),
    item("66", "Lose my temper", "ക്ഷമ നശിക്കാറുണ്ട്", Neuroticism, 2, Positive),
    item("67", "Prefer to be alone", "തനിച്ചിരിക്കാൻ ഇഷ്ടപ്പെടുന്നു", Extraversion, 2, Negative),
    item("68", "Do not like poetry", "കവിത ഇഷ്ടമല്ല", Openness, 2, Negative),
    item(
        "69",
        "Take advantage of others",
        "മറ്റുള്ളവരെ മുതലെടുക്കുന്നു",
        Agreeableness,
        2,
        Negative,
    ),
    item(
        "70",
        "Leave a mess in my room",
        "മുറി അലങ്കോലമാക്കിയിടുന്നു",
        Conscientiousness,
        2,
        Negative,
    ),
    item(
        "71",
        "Am often down in the dumps",
        "പലപ്പോഴും മനസ്സ് മടുത്തിരിക്കുന്നു",
        Neuroticism,
        3,
        Positive,
    ),
    item(
        "72",
        "Take control of things",
        "കാര്യങ്ങളുടെ നിയന്ത്രണം ഏറ്റെടുക്കുന്നു",
        Extraversion,
        3,
        Positive,
    ),
    item(
        "73",
        "Rarely notice my emotional reactions",
        "എന്റെ വൈകാരിക പ്രതികരണങ്ങൾ അപൂർവമായേ ശ്രദ്ധിക്കാറുള്ളൂ",
        Openness,
        3,
        Negative,
    ),
    item(
        "74",
        "Am indifferent to the feelings of others",
        "മറ്റുള്ളവരുടെ വികാരങ്ങളോട് നിസ്സംഗതയാണ്",
        Agreeableness,
        3,
        Negative,
    ),
    item("75", "Break rules", "നിയമങ്ങൾ ലംഘിക്കുന്നു", Conscientiousness, 3, Negative),
    item(
        "76",
        "Only feel comfortable with friends",
        "സുഹൃത്തുക്കളോടൊപ്പം മാത്രമേ സ്വസ്ഥത തോന്നൂ",
        Neuroticism,
        4,
        Positive,
    ),
    item(
        "77",
        "Do a lot in my spare time",
        "ഒഴിവുസമയത്ത് ധാരാളം കാര്യങ്ങൾ ചെയ്യുന്നു",
        Extraversion,
        4,
        Positive,
    ),
    item("78", "Dislike changes", "മാറ്റങ്ങൾ ഇഷ്ടമല്ല", Openness, 4, Negative),
    item("79", "Insult people", "ആളുകളെ അപമാനിക്കുന്നു", Agreeableness, 4, Negative),
    item(
        "80",
        "Do just enough work to get by",
        "കഷ്ടിച്ച് കടന്നുപോകാൻ വേണ്ടത്ര മാത്രം ജോലി ചെയ്യുന്നു",
        Conscientiousness,
        4,
        Negative,
    ),
    item(
        "81",
        "Easily resist temptations",
        "പ്രലോഭനങ്ങളെ എളുപ്പത്തിൽ ചെറുക്കുന്നു",
        Neuroticism,
        5,
        Negative,
    ),
    item(
        "82",
        "Enjoy being reckless",
        "അശ്രദ്ധമായി പെരുമാറുന്നത് ആസ്വദിക്കുന്നു",
        Extraversion,
        5,
        Positive,
    ),
    item(
        "83",
        "Have difficulty understanding abstract ideas",
        "അമൂർത്ത ആശയങ്ങൾ മനസ്സിലാക്കാൻ ബുദ്ധിമുട്ടുണ്ട്",
        Openness,
        5,
        Negative,
    ),
    item(
        "84",
        "Have a high opinion of myself",
        "എന്നെക്കുറിച്ച് വലിയ അഭിപ്രായമുണ്ട്",
        Agreeableness,
        5,
        Negative,
    ),
    item("85", "Waste my time", "സമയം പാഴാക്കുന്നു", Conscientiousness, 5, Negative),
    item(
        "86",
        "Feel that I'm unable to deal with things",
        "കാര്യങ്ങൾ കൈകാര്യം ചെയ്യാൻ കഴിയില്ലെന്ന് തോന്നുന്നു",
        Neuroticism,
        6,
        Positive,
    ),
    item("87", "Love life", "ജീവിതത്തെ സ്നേഹിക്കുന്നു", Extraversion, 6, Positive),
    item(
        "88",
        "Tend to vote for conservative political candidates",
        "യാഥാസ്ഥിതിക രാഷ്ട്രീയ സ്ഥാനാർത്ഥികൾക്ക് വോട്ട് ചെയ്യാറുണ്ട്",
        Openness,
        6,
        Negative,
    ),
    item(
        "89",
        "Am not interested in other people's problems",
        "മറ്റുള്ളവരുടെ പ്രശ്നങ്ങളിൽ താൽപ്പര്യമില്ല",
        Agreeableness,
        6,
        Negative,
    ),
    item(
        "90",
        "Rush into things",
        "കാര്യങ്ങളിലേക്ക് തിടുക്കത്തിൽ ഇറങ്ങുന്നു",
        Conscientiousness,
        6,
        Negative,
    ),
    item(
        "91",
        "Get stressed out easily",
        "എളുപ്പത്തിൽ സമ്മർദ്ദത്തിലാകുന്നു",
        Neuroticism,
        1,
        Positive,
    ),
    item(
        "92",
        "Keep others at a distance",
        "മറ്റുള്ളവരെ അകലത്തിൽ നിർത്തുന്നു",
        Extraversion,
        1,
        Negative,
    ),
    item("93", "Like to get lost in thought", "ചിന്തകളിൽ മുഴുകാൻ ഇഷ്ടമാണ്", Openness, 1, Positive),
    item("94", "Distrust people", "ആളുകളെ അവിശ്വസിക്കുന്നു", Agreeableness, 1, Negative),
    item(
        "95",
        "Know how to get things done",
        "കാര്യങ്ങൾ എങ്ങനെ നടപ്പാക്കണമെന്ന് അറിയാം",
        Conscientiousness,
        1,
        Positive,
    ),
    item("96", "Am not easily annoyed", "എളുപ്പത്തിൽ ശല്യം തോന്നാറില്ല", Neuroticism, 2, Negative),
    item("97", "Avoid crowds", "ആൾക്കൂട്ടം ഒഴിവാക്കുന്നു", Extraversion, 2, Negative),
    item(
        "98",
        "Do not enjoy going to art museums",
        "കലാ മ്യൂസിയങ്ങൾ സന്ദർശിക്കുന്നത് ആസ്വദിക്കാറില്ല",
        Openness,
        2,
        Negative,
    ),
    item(
        "99",
        "Obstruct others' plans",
        "മറ്റുള്ളവരുടെ പദ്ധതികൾക്ക് തടസ്സം നിൽക്കുന്നു",
        Agreeableness,
        2,
        Negative,
    ),
    item(
        "100",
        "Leave my belongings around",
        "സാധനങ്ങൾ അവിടവിടെ ഇട്ടേക്കുന്നു",
        Conscientiousness,
        2,
        Negative,
    ),
    item(
        "101",
        "Feel comfortable with myself",
        "എന്നോടുതന്നെ സ്വസ്ഥത തോന്നുന്നു",
        Neuroticism,
        3,
        Negative,
    ),
    item(
        "102",
        "Wait for others to lead the way",
        "മറ്റുള്ളവർ വഴികാണിക്കാൻ കാത്തിരിക്കുന്നു",
        Extraversion,
        3,
        Negative,
    ),
    item(
        "103",
        "Don't understand people who get emotional",
        "വികാരാധീനരാകുന്നവരെ മനസ്സിലാകുന്നില്ല",
        Openness,
        3,
        Negative,
    ),
    item(
        "104",
        "Take no time for others",
        "മറ്റുള്ളവർക്കായി സമയം മാറ്റിവയ്ക്കാറില്ല",
        Agreeableness,
        3,
        Negative,
    ),
    item("105", "Break my promises", "വാഗ്ദാനങ്ങൾ ലംഘിക്കുന്നു", Conscientiousness, 3, Negative),
    item(
        "106",
        "Am not bothered by difficult social situations",
        "പ്രയാസമുള്ള സാമൂഹിക സാഹചര്യങ്ങൾ എന്നെ അലട്ടാറില്ല",
        Neuroticism,
        4,
        Negative,
    ),
    item(
        "107",
        "Like to take it easy",
        "സാവധാനം കാര്യങ്ങൾ ചെയ്യാൻ ഇഷ്ടമാണ്",
        Extraversion,
        4,
        Negative,
    ),
    item(
        "108",
        "Am attached to conventional ways",
        "പരമ്പരാഗത രീതികളോട് ആഭിമുഖ്യമുണ്ട്",
        Openness,
        4,
        Negative,
    ),
    item("109", "Get back at others", "മറ്റുള്ളവരോട് പകരം വീട്ടുന്നു", Agreeableness, 4, Negative),
    item(
        "110",
        "Put little time and effort into my work",
        "ജോലിയിൽ കുറച്ച് സമയവും പരിശ്രമവും മാത്രം ചെലവഴിക്കുന്നു",
        Conscientiousness,
        4,
        Negative,
    ),
    item(
        "111",
        "Am able to control my cravings",
        "ആസക്തികളെ നിയന്ത്രിക്കാൻ കഴിയും",
        Neuroticism,
        5,
        Negative,
    ),
    item("112", "Act wild and crazy", "അതിരുവിട്ടു പെരുമാറുന്നു", Extraversion, 5, Positive),
    item(
        "113",
        "Am not interested in theoretical discussions",
        "സൈദ്ധാന്തിക ചർച്ചകളിൽ താൽപ്പര്യമില്ല",
        Openness,
        5,
        Negative,
    ),
    item(
        "114",
        "Boast about my virtues",
        "എന്റെ ഗുണങ്ങളെക്കുറിച്ച് വീമ്പിളക്കുന്നു",
        Agreeableness,
        5,
        Negative,
    ),
    item(
        "115",
        "Have difficulty starting tasks",
        "ജോലികൾ തുടങ്ങാൻ ബുദ്ധിമുട്ടുണ്ട്",
        Conscientiousness,
        5,
        Negative,
    ),
    item(
        "116",
        "Remain calm under pressure",
        "സമ്മർദ്ദത്തിലും ശാന്തത പാലിക്കുന്നു",
        Neuroticism,
        6,
        Negative,
    ),
    item(
        "117",
        "Look at the bright side of life",
        "ജീവിതത്തിന്റെ നല്ല വശം കാണുന്നു",
        Extraversion,
        6,
        Positive,
    ),
    item(
        "118",
        "Believe that we should be tough on crime",
        "കുറ്റകൃത്യങ്ങളോട് കർശനമായിരിക്കണമെന്ന് വിശ്വസിക്കുന്നു",
        Openness,
        6,
        Negative,
    ),
    item(
        "119",
        "Try not to think about the needy",
        "ആവശ്യക്കാരെക്കുറിച്ച് ചിന്തിക്കാതിരിക്കാൻ ശ്രമിക്കുന്നു",
        Agreeableness,
        6,
        Negative,
    ),
    item(
        "120",
        "Act without thinking",
        "ആലോചിക്കാതെ പ്രവർത്തിക്കുന്നു",
        Conscientiousness,
        6,
        Negative,
    ),
];

/// Look up an item by id.
pub fn find(item_id: &str) -> Option<&'static Item> {
    IPIP_NEO_120.iter().find(|item| item.id == item_id)
}
