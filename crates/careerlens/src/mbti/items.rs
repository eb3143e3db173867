use super::{MbtiItem, Pole};

use Pole::{Extraversion, Feeling, Introversion, Intuition, Judging, Perceiving, Sensing, Thinking};

const fn item(id: &'static str, text: &'static str, text_ml: &'static str, pole: Pole) -> MbtiItem {
    MbtiItem {
        id,
        text,
        text_ml,
        pole,
    }
}

/// Four items per pole, cycling `E, I, S, N, T, F, J, P`.
pub static MBTI_ITEMS: [MbtiItem; 32] = [
    item(
        "M01",
        "I feel energized after spending time with a group of people",
        "ഒരു കൂട്ടം ആളുകളോടൊപ്പം സമയം ചെലവഴിച്ചശേഷം എനിക്ക് ഊർജ്ജം തോന്നുന്നു",
        Extraversion,
    ),
    item(
        "M02",
        "I need quiet time alone to recharge",
        "ഊർജ്ജം വീണ്ടെടുക്കാൻ എനിക്ക് തനിച്ചുള്ള ശാന്തസമയം വേണം",
        Introversion,
    ),
    item(
        "M03",
        "I focus on facts and details rather than the big picture",
        "വലിയ ചിത്രത്തേക്കാൾ വസ്തുതകളിലും വിശദാംശങ്ങളിലുമാണ് ഞാൻ ശ്രദ്ധിക്കുന്നത്",
        Sensing,
    ),
    item(
        "M04",
        "I enjoy imagining future possibilities",
        "ഭാവിയിലെ സാധ്യതകൾ സങ്കൽപ്പിക്കുന്നത് ഞാൻ ആസ്വദിക്കുന്നു",
        Intuition,
    ),
    item(
        "M05",
        "I make decisions based on logic rather than feelings",
        "വികാരങ്ങളേക്കാൾ യുക്തിയെ അടിസ്ഥാനമാക്കിയാണ് ഞാൻ തീരുമാനങ്ങളെടുക്കുന്നത്",
        Thinking,
    ),
    item(
        "M06",
        "I consider how decisions will affect people's feelings",
        "തീരുമാനങ്ങൾ ആളുകളുടെ വികാരങ്ങളെ എങ്ങനെ ബാധിക്കുമെന്ന് ഞാൻ പരിഗണിക്കുന്നു",
        Feeling,
    ),
    item(
        "M07",
        "I like to have a plan and stick to it",
        "ഒരു പദ്ധതി തയ്യാറാക്കി അത് പിന്തുടരാൻ എനിക്കിഷ്ടമാണ്",
        Judging,
    ),
    item(
        "M08",
        "I prefer to keep my options open",
        "എന്റെ സാധ്യതകൾ തുറന്നിടാനാണ് എനിക്കിഷ്ടം",
        Perceiving,
    ),
    item(
        "M09",
        "I enjoy being the center of attention",
        "ശ്രദ്ധാകേന്ദ്രമാകുന്നത് ഞാൻ ആസ്വദിക്കുന്നു",
        Extraversion,
    ),
    item(
        "M10",
        "I prefer one-on-one conversations to group discussions",
        "കൂട്ടചർച്ചകളേക്കാൾ നേരിട്ടുള്ള സംഭാഷണങ്ങളാണ് എനിക്കിഷ്ടം",
        Introversion,
    ),
    item(
        "M11",
        "I trust practical experience more than theories",
        "സിദ്ധാന്തങ്ങളേക്കാൾ പ്രായോഗിക അനുഭവത്തെയാണ് ഞാൻ വിശ്വസിക്കുന്നത്",
        Sensing,
    ),
    item(
        "M12",
        "I look for patterns and hidden meanings",
        "ഞാൻ മാതൃകകളും ഒളിഞ്ഞിരിക്കുന്ന അർത്ഥങ്ങളും തേടുന്നു",
        Intuition,
    ),
    item(
        "M13",
        "I value fairness and consistency over harmony",
        "ഐക്യത്തേക്കാൾ നീതിക്കും സ്ഥിരതയ്ക്കുമാണ് ഞാൻ വില കൽപ്പിക്കുന്നത്",
        Thinking,
    ),
    item(
        "M14",
        "I value harmony in my relationships",
        "ബന്ധങ്ങളിലെ ഐക്യത്തിന് ഞാൻ വില കൽപ്പിക്കുന്നു",
        Feeling,
    ),
    item(
        "M15",
        "I feel uneasy when things are left undecided",
        "കാര്യങ്ങൾ തീരുമാനിക്കപ്പെടാതെ കിടക്കുമ്പോൾ എനിക്ക് അസ്വസ്ഥത തോന്നുന്നു",
        Judging,
    ),
    item(
        "M16",
        "I adapt easily when plans change suddenly",
        "പദ്ധതികൾ പെട്ടെന്ന് മാറുമ്പോൾ ഞാൻ എളുപ്പത്തിൽ പൊരുത്തപ്പെടുന്നു",
        Perceiving,
    ),
    item(
        "M17",
        "I think out loud and talk through my ideas",
        "ഞാൻ ഉറക്കെ ചിന്തിക്കുകയും ആശയങ്ങൾ സംസാരിച്ച് വ്യക്തമാക്കുകയും ചെയ്യുന്നു",
        Extraversion,
    ),
    item(
        "M18",
        "I think things through before I speak",
        "സംസാരിക്കുന്നതിനുമുമ്പ് ഞാൻ കാര്യങ്ങൾ ആലോചിക്കുന്നു",
        Introversion,
    ),
    item(
        "M19",
        "I prefer clear, step-by-step instructions",
        "വ്യക്തമായ, ഘട്ടംഘട്ടമായുള്ള നിർദ്ദേശങ്ങളാണ് എനിക്കിഷ്ടം",
        Sensing,
    ),
    item(
        "M20",
        "I get bored with routine, repetitive tasks",
        "ആവർത്തിച്ചുള്ള പതിവു ജോലികൾ എന്നെ മടുപ്പിക്കുന്നു",
        Intuition,
    ),
    item(
        "M21",
        "I can give critical feedback without much discomfort",
        "വലിയ വിഷമമില്ലാതെ എനിക്ക് വിമർശനാത്മക പ്രതികരണം നൽകാൻ കഴിയും",
        Thinking,
    ),
    item(
        "M22",
        "I am moved by other people's stories",
        "മറ്റുള്ളവരുടെ അനുഭവകഥകൾ എന്നെ സ്പർശിക്കുന്നു",
        Feeling,
    ),
    item(
        "M23",
        "I finish tasks well before the deadline",
        "സമയപരിധിക്ക് വളരെ മുമ്പേ ഞാൻ ജോലികൾ തീർക്കുന്നു",
        Judging,
    ),
    item(
        "M24",
        "I work best under last-minute pressure",
        "അവസാന നിമിഷത്തെ സമ്മർദ്ദത്തിലാണ് ഞാൻ ഏറ്റവും നന്നായി ജോലി ചെയ്യുന്നത്",
        Perceiving,
    ),
    item(
        "M25",
        "I find it easy to start conversations with strangers",
        "അപരിചിതരുമായി സംഭാഷണം തുടങ്ങുന്നത് എനിക്ക് എളുപ്പമാണ്",
        Extraversion,
    ),
    item(
        "M26",
        "I enjoy working on my own for long stretches",
        "ദീർഘനേരം തനിച്ച് ജോലി ചെയ്യുന്നത് ഞാൻ ആസ്വദിക്കുന്നു",
        Introversion,
    ),
    item(
        "M27",
        "I notice small details that others miss",
        "മറ്റുള്ളവർ ശ്രദ്ധിക്കാത്ത ചെറിയ വിശദാംശങ്ങൾ ഞാൻ ശ്രദ്ധിക്കുന്നു",
        Sensing,
    ),
    item(
        "M28",
        "I am drawn to new ideas even when they are untested",
        "പരീക്ഷിക്കപ്പെടാത്തവയാണെങ്കിലും പുതിയ ആശയങ്ങൾ എന്നെ ആകർഷിക്കുന്നു",
        Intuition,
    ),
    item(
        "M29",
        "I analyze problems objectively",
        "ഞാൻ പ്രശ്നങ്ങളെ വസ്തുനിഷ്ഠമായി വിശകലനം ചെയ്യുന്നു",
        Thinking,
    ),
    item(
        "M30",
        "I make choices based on my personal values",
        "എന്റെ വ്യക്തിപരമായ മൂല്യങ്ങളെ അടിസ്ഥാനമാക്കിയാണ് ഞാൻ തിരഞ്ഞെടുപ്പുകൾ നടത്തുന്നത്",
        Feeling,
    ),
    item(
        "M31",
        "I keep my workspace and schedule organized",
        "എന്റെ ജോലിസ്ഥലവും സമയക്രമവും ഞാൻ ചിട്ടയോടെ സൂക്ഷിക്കുന്നു",
        Judging,
    ),
    item(
        "M32",
        "I enjoy improvising rather than following a schedule",
        "സമയക്രമം പാലിക്കുന്നതിനേക്കാൾ സന്ദർഭോചിതമായി പ്രവർത്തിക്കുന്നതാണ് എനിക്കിഷ്ടം",
        Perceiving,
    ),
];
