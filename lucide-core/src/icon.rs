//! Icon identifiers — one variant per glyph in the bundled Lucide font.
//!
//! Each variant maps to exactly one private-use-area code point and one
//! kebab-case Lucide name. The table is static; `Icon::ALL` lists every
//! variant in code point order.
//!
//! The code points are provisional: they are assigned in name order
//! from U+E038 and have not been checked against a Lucide release font.
//! Regenerate the table from the `lucide.ttf` cmap that ships with the
//! library; `IconEngine::unmapped_icons` in `lucide-text` lists entries
//! the registered font has no glyph for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IconError;

macro_rules! icons {
    ($($variant:ident => ($name:literal, $codepoint:literal)),* $(,)?) => {
        /// A named glyph in the Lucide icon font.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(into = "&'static str", try_from = "String")]
        pub enum Icon {
            $($variant,)*
        }

        impl Icon {
            /// Every icon, in code point order.
            pub const ALL: &'static [Icon] = &[$(Icon::$variant,)*];

            /// The glyph string rendered by the icon font.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Icon::$variant => concat!($codepoint),)*
                }
            }

            /// The private-use-area code point of the glyph.
            pub const fn codepoint(self) -> char {
                match self {
                    $(Icon::$variant => $codepoint,)*
                }
            }

            /// Kebab-case Lucide name (`"shield-check"`).
            pub const fn name(self) -> &'static str {
                match self {
                    $(Icon::$variant => $name,)*
                }
            }
        }
    };
}

icons! {
    Activity => ("activity", '\u{e038}'),
    Airplay => ("airplay", '\u{e039}'),
    AirVent => ("air-vent", '\u{e03a}'),
    AlarmClock => ("alarm-clock", '\u{e03b}'),
    Album => ("album", '\u{e03c}'),
    AlignCenter => ("align-center", '\u{e03d}'),
    AlignJustify => ("align-justify", '\u{e03e}'),
    AlignLeft => ("align-left", '\u{e03f}'),
    AlignRight => ("align-right", '\u{e040}'),
    Anchor => ("anchor", '\u{e041}'),
    Aperture => ("aperture", '\u{e042}'),
    Archive => ("archive", '\u{e043}'),
    ArrowDown => ("arrow-down", '\u{e044}'),
    ArrowLeft => ("arrow-left", '\u{e045}'),
    ArrowRight => ("arrow-right", '\u{e046}'),
    ArrowUp => ("arrow-up", '\u{e047}'),
    AtSign => ("at-sign", '\u{e048}'),
    Award => ("award", '\u{e049}'),
    BarChart => ("bar-chart", '\u{e04a}'),
    Battery => ("battery", '\u{e04b}'),
    Bell => ("bell", '\u{e04c}'),
    Bluetooth => ("bluetooth", '\u{e04d}'),
    Bold => ("bold", '\u{e04e}'),
    Book => ("book", '\u{e04f}'),
    Bookmark => ("bookmark", '\u{e050}'),
    Box => ("box", '\u{e051}'),
    Briefcase => ("briefcase", '\u{e052}'),
    Calendar => ("calendar", '\u{e053}'),
    Camera => ("camera", '\u{e054}'),
    Check => ("check", '\u{e055}'),
    CheckCircle => ("check-circle", '\u{e056}'),
    ChevronDown => ("chevron-down", '\u{e057}'),
    ChevronLeft => ("chevron-left", '\u{e058}'),
    ChevronRight => ("chevron-right", '\u{e059}'),
    ChevronUp => ("chevron-up", '\u{e05a}'),
    Circle => ("circle", '\u{e05b}'),
    Clipboard => ("clipboard", '\u{e05c}'),
    Clock => ("clock", '\u{e05d}'),
    Cloud => ("cloud", '\u{e05e}'),
    Code => ("code", '\u{e05f}'),
    Compass => ("compass", '\u{e060}'),
    Copy => ("copy", '\u{e061}'),
    Cpu => ("cpu", '\u{e062}'),
    CreditCard => ("credit-card", '\u{e063}'),
    Database => ("database", '\u{e064}'),
    Download => ("download", '\u{e065}'),
    Edit => ("edit", '\u{e066}'),
    Eye => ("eye", '\u{e067}'),
    EyeOff => ("eye-off", '\u{e068}'),
    File => ("file", '\u{e069}'),
    FileText => ("file-text", '\u{e06a}'),
    Filter => ("filter", '\u{e06b}'),
    Flag => ("flag", '\u{e06c}'),
    Folder => ("folder", '\u{e06d}'),
    Gift => ("gift", '\u{e06e}'),
    GitBranch => ("git-branch", '\u{e06f}'),
    Globe => ("globe", '\u{e070}'),
    Heart => ("heart", '\u{e071}'),
    HelpCircle => ("help-circle", '\u{e072}'),
    Home => ("home", '\u{e073}'),
    Image => ("image", '\u{e074}'),
    Inbox => ("inbox", '\u{e075}'),
    Info => ("info", '\u{e076}'),
    Key => ("key", '\u{e077}'),
    Layers => ("layers", '\u{e078}'),
    Layout => ("layout", '\u{e079}'),
    Link => ("link", '\u{e07a}'),
    List => ("list", '\u{e07b}'),
    Loader => ("loader", '\u{e07c}'),
    Lock => ("lock", '\u{e07d}'),
    LogIn => ("log-in", '\u{e07e}'),
    LogOut => ("log-out", '\u{e07f}'),
    Mail => ("mail", '\u{e080}'),
    MapPin => ("map-pin", '\u{e081}'),
    Menu => ("menu", '\u{e082}'),
    MessageCircle => ("message-circle", '\u{e083}'),
    Mic => ("mic", '\u{e084}'),
    Minus => ("minus", '\u{e085}'),
    Monitor => ("monitor", '\u{e086}'),
    Moon => ("moon", '\u{e087}'),
    MoreHorizontal => ("more-horizontal", '\u{e088}'),
    MoreVertical => ("more-vertical", '\u{e089}'),
    Music => ("music", '\u{e08a}'),
    Package => ("package", '\u{e08b}'),
    Paperclip => ("paperclip", '\u{e08c}'),
    Pause => ("pause", '\u{e08d}'),
    Phone => ("phone", '\u{e08e}'),
    Play => ("play", '\u{e08f}'),
    Plus => ("plus", '\u{e090}'),
    Power => ("power", '\u{e091}'),
    Printer => ("printer", '\u{e092}'),
    RefreshCw => ("refresh-cw", '\u{e093}'),
    Save => ("save", '\u{e094}'),
    Search => ("search", '\u{e095}'),
    Send => ("send", '\u{e096}'),
    Settings => ("settings", '\u{e097}'),
    Share => ("share", '\u{e098}'),
    Shield => ("shield", '\u{e099}'),
    ShieldCheck => ("shield-check", '\u{e09a}'),
    ShoppingCart => ("shopping-cart", '\u{e09b}'),
    Slash => ("slash", '\u{e09c}'),
    Smartphone => ("smartphone", '\u{e09d}'),
    Star => ("star", '\u{e09e}'),
    Sun => ("sun", '\u{e09f}'),
    Tag => ("tag", '\u{e0a0}'),
    Terminal => ("terminal", '\u{e0a1}'),
    ThumbsUp => ("thumbs-up", '\u{e0a2}'),
    Trash => ("trash", '\u{e0a3}'),
    Trash2 => ("trash-2", '\u{e0a4}'),
    TrendingUp => ("trending-up", '\u{e0a5}'),
    Truck => ("truck", '\u{e0a6}'),
    Tv => ("tv", '\u{e0a7}'),
    Type => ("type", '\u{e0a8}'),
    Umbrella => ("umbrella", '\u{e0a9}'),
    Unlock => ("unlock", '\u{e0aa}'),
    Upload => ("upload", '\u{e0ab}'),
    User => ("user", '\u{e0ac}'),
    Users => ("users", '\u{e0ad}'),
    Video => ("video", '\u{e0ae}'),
    Volume2 => ("volume-2", '\u{e0af}'),
    Wifi => ("wifi", '\u{e0b0}'),
    Wind => ("wind", '\u{e0b1}'),
    X => ("x", '\u{e0b2}'),
    XCircle => ("x-circle", '\u{e0b3}'),
    Zap => ("zap", '\u{e0b4}'),
    ZoomIn => ("zoom-in", '\u{e0b5}'),
    ZoomOut => ("zoom-out", '\u{e0b6}'),
}

impl Icon {
    /// Look an icon up by its kebab-case name.
    pub fn from_name(name: &str) -> Option<Icon> {
        Self::ALL.iter().copied().find(|icon| icon.name() == name)
    }

    /// Look an icon up by its glyph code point.
    pub fn from_codepoint(codepoint: char) -> Option<Icon> {
        // The table is sorted by code point.
        Self::ALL
            .binary_search_by_key(&codepoint, |icon| icon.codepoint())
            .ok()
            .map(|index| Self::ALL[index])
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<icon>{}</icon>", self.as_str())
    }
}

impl FromStr for Icon {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::from_name(s).ok_or_else(|| IconError::UnknownIcon(s.to_string()))
    }
}

impl From<Icon> for &'static str {
    fn from(icon: Icon) -> Self {
        icon.name()
    }
}

impl TryFrom<String> for Icon {
    type Error = IconError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl AsRef<str> for Icon {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// ===================================================================
// Tests
// ===================================================================
