//! The xterm 256-color palette.
//!
//! Indices 0-15 are the terminal's own standard and bright colors, 16-231 a
//! 6x6x6 color cube and 232-255 a grey ramp. Every index is exposed as a
//! named constant; the name carries no meaning in the output, only the index
//! is written. Names shared by several indices get the index as a suffix.

use std::fmt;

use crate::color::Rgb;

/// An index into the 256-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Palette(pub u8);

/// Channel levels of the 6x6x6 cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// xterm defaults for the 16 system colors.
const SYSTEM_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Conventional name of every index.
const NAMES: [&str; 256] = [
    "Black", "Maroon", "Green", "Olive", "Navy", "Purple", "Teal", "Silver", "Grey", "Red", "Lime",
    "Yellow", "Blue", "Fuchsia", "Aqua", "White", "Grey0", "NavyBlue", "DarkBlue", "Blue3",
    "Blue3", "Blue1", "DarkGreen", "DeepSkyBlue4", "DeepSkyBlue4", "DeepSkyBlue4", "DodgerBlue3",
    "DodgerBlue2", "Green4", "SpringGreen4", "Turquoise4", "DeepSkyBlue3", "DeepSkyBlue3",
    "DodgerBlue1", "Green3", "SpringGreen3", "DarkCyan", "LightSeaGreen", "DeepSkyBlue2",
    "DeepSkyBlue1", "Green3", "SpringGreen3", "SpringGreen2", "Cyan3", "DarkTurquoise",
    "Turquoise2", "Green1", "SpringGreen2", "SpringGreen1", "MediumSpringGreen", "Cyan2", "Cyan1",
    "DarkRed", "DeepPink4", "Purple4", "Purple4", "Purple3", "BlueViolet", "Orange4", "Grey37",
    "MediumPurple4", "SlateBlue3", "SlateBlue3", "RoyalBlue1", "Chartreuse4", "DarkSeaGreen4",
    "PaleTurquoise4", "SteelBlue", "SteelBlue3", "CornflowerBlue", "Chartreuse3", "DarkSeaGreen4",
    "CadetBlue", "CadetBlue", "SkyBlue3", "SteelBlue1", "Chartreuse3", "PaleGreen3", "SeaGreen3",
    "Aquamarine3", "MediumTurquoise", "SteelBlue1", "Chartreuse2", "SeaGreen2", "SeaGreen1",
    "SeaGreen1", "Aquamarine1", "DarkSlateGray2", "DarkRed", "DeepPink4", "DarkMagenta",
    "DarkMagenta", "DarkViolet", "Purple", "Orange4", "LightPink4", "Plum4", "MediumPurple3",
    "MediumPurple3", "SlateBlue1", "Yellow4", "Wheat4", "Grey53", "LightSlateGrey", "MediumPurple",
    "LightSlateBlue", "Yellow4", "DarkOliveGreen3", "DarkSeaGreen", "LightSkyBlue3",
    "LightSkyBlue3", "SkyBlue2", "Chartreuse2", "DarkOliveGreen3", "PaleGreen3", "DarkSeaGreen3",
    "DarkSlateGray3", "SkyBlue1", "Chartreuse1", "LightGreen", "LightGreen", "PaleGreen1",
    "Aquamarine1", "DarkSlateGray1", "Red3", "DeepPink4", "MediumVioletRed", "Magenta3",
    "DarkViolet", "Purple", "DarkOrange3", "IndianRed", "HotPink3", "MediumOrchid3",
    "MediumOrchid", "MediumPurple2", "DarkGoldenrod", "LightSalmon3", "RosyBrown", "Grey63",
    "MediumPurple2", "MediumPurple1", "Gold3", "DarkKhaki", "NavajoWhite3", "Grey69",
    "LightSteelBlue3", "LightSteelBlue", "Yellow3", "DarkOliveGreen3", "DarkSeaGreen3",
    "DarkSeaGreen2", "LightCyan3", "LightSkyBlue1", "GreenYellow", "DarkOliveGreen2", "PaleGreen1",
    "DarkSeaGreen2", "DarkSeaGreen1", "PaleTurquoise1", "Red3", "DeepPink3", "DeepPink3",
    "Magenta3", "Magenta3", "Magenta2", "DarkOrange3", "IndianRed", "HotPink3", "HotPink2",
    "Orchid", "MediumOrchid1", "Orange3", "LightSalmon3", "LightPink3", "Pink3", "Plum3", "Violet",
    "Gold3", "LightGoldenrod3", "Tan", "MistyRose3", "Thistle3", "Plum2", "Yellow3", "Khaki3",
    "LightGoldenrod2", "LightYellow3", "Grey84", "LightSteelBlue1", "Yellow2", "DarkOliveGreen1",
    "DarkOliveGreen1", "DarkSeaGreen1", "Honeydew2", "LightCyan1", "Red1", "DeepPink2",
    "DeepPink1", "DeepPink1", "Magenta2", "Magenta1", "OrangeRed1", "IndianRed1", "IndianRed1",
    "HotPink", "HotPink", "MediumOrchid1", "DarkOrange", "Salmon1", "LightCoral", "PaleVioletRed1",
    "Orchid2", "Orchid1", "Orange1", "SandyBrown", "LightSalmon1", "LightPink1", "Pink1", "Plum1",
    "Gold1", "LightGoldenrod2", "LightGoldenrod2", "NavajoWhite1", "MistyRose1", "Thistle1",
    "Yellow1", "LightGoldenrod1", "Khaki1", "Wheat1", "Cornsilk1", "Grey100", "Grey3", "Grey7",
    "Grey11", "Grey15", "Grey19", "Grey23", "Grey27", "Grey30", "Grey35", "Grey39", "Grey42",
    "Grey46", "Grey50", "Grey54", "Grey58", "Grey62", "Grey66", "Grey70", "Grey74", "Grey78",
    "Grey82", "Grey85", "Grey89", "Grey93",
];

#[rustfmt::skip]
impl Palette {
    pub const BLACK: Palette = Palette(0);
    pub const MAROON: Palette = Palette(1);
    pub const GREEN: Palette = Palette(2);
    pub const OLIVE: Palette = Palette(3);
    pub const NAVY: Palette = Palette(4);
    pub const PURPLE_5: Palette = Palette(5);
    pub const TEAL: Palette = Palette(6);
    pub const SILVER: Palette = Palette(7);
    pub const GREY: Palette = Palette(8);
    pub const RED: Palette = Palette(9);
    pub const LIME: Palette = Palette(10);
    pub const YELLOW: Palette = Palette(11);
    pub const BLUE: Palette = Palette(12);
    pub const FUCHSIA: Palette = Palette(13);
    pub const AQUA: Palette = Palette(14);
    pub const WHITE: Palette = Palette(15);
    pub const GREY0: Palette = Palette(16);
    pub const NAVY_BLUE: Palette = Palette(17);
    pub const DARK_BLUE: Palette = Palette(18);
    pub const BLUE3_19: Palette = Palette(19);
    pub const BLUE3_20: Palette = Palette(20);
    pub const BLUE1: Palette = Palette(21);
    pub const DARK_GREEN: Palette = Palette(22);
    pub const DEEP_SKY_BLUE4_23: Palette = Palette(23);
    pub const DEEP_SKY_BLUE4_24: Palette = Palette(24);
    pub const DEEP_SKY_BLUE4_25: Palette = Palette(25);
    pub const DODGER_BLUE3: Palette = Palette(26);
    pub const DODGER_BLUE2: Palette = Palette(27);
    pub const GREEN4: Palette = Palette(28);
    pub const SPRING_GREEN4: Palette = Palette(29);
    pub const TURQUOISE4: Palette = Palette(30);
    pub const DEEP_SKY_BLUE3_31: Palette = Palette(31);
    pub const DEEP_SKY_BLUE3_32: Palette = Palette(32);
    pub const DODGER_BLUE1: Palette = Palette(33);
    pub const GREEN3_34: Palette = Palette(34);
    pub const SPRING_GREEN3_35: Palette = Palette(35);
    pub const DARK_CYAN: Palette = Palette(36);
    pub const LIGHT_SEA_GREEN: Palette = Palette(37);
    pub const DEEP_SKY_BLUE2: Palette = Palette(38);
    pub const DEEP_SKY_BLUE1: Palette = Palette(39);
    pub const GREEN3_40: Palette = Palette(40);
    pub const SPRING_GREEN3_41: Palette = Palette(41);
    pub const SPRING_GREEN2_42: Palette = Palette(42);
    pub const CYAN3: Palette = Palette(43);
    pub const DARK_TURQUOISE: Palette = Palette(44);
    pub const TURQUOISE2: Palette = Palette(45);
    pub const GREEN1: Palette = Palette(46);
    pub const SPRING_GREEN2_47: Palette = Palette(47);
    pub const SPRING_GREEN1: Palette = Palette(48);
    pub const MEDIUM_SPRING_GREEN: Palette = Palette(49);
    pub const CYAN2: Palette = Palette(50);
    pub const CYAN1: Palette = Palette(51);
    pub const DARK_RED_52: Palette = Palette(52);
    pub const DEEP_PINK4_53: Palette = Palette(53);
    pub const PURPLE4_54: Palette = Palette(54);
    pub const PURPLE4_55: Palette = Palette(55);
    pub const PURPLE3: Palette = Palette(56);
    pub const BLUE_VIOLET: Palette = Palette(57);
    pub const ORANGE4_58: Palette = Palette(58);
    pub const GREY37: Palette = Palette(59);
    pub const MEDIUM_PURPLE4: Palette = Palette(60);
    pub const SLATE_BLUE3_61: Palette = Palette(61);
    pub const SLATE_BLUE3_62: Palette = Palette(62);
    pub const ROYAL_BLUE1: Palette = Palette(63);
    pub const CHARTREUSE4: Palette = Palette(64);
    pub const DARK_SEA_GREEN4_65: Palette = Palette(65);
    pub const PALE_TURQUOISE4: Palette = Palette(66);
    pub const STEEL_BLUE: Palette = Palette(67);
    pub const STEEL_BLUE3: Palette = Palette(68);
    pub const CORNFLOWER_BLUE: Palette = Palette(69);
    pub const CHARTREUSE3_70: Palette = Palette(70);
    pub const DARK_SEA_GREEN4_71: Palette = Palette(71);
    pub const CADET_BLUE_72: Palette = Palette(72);
    pub const CADET_BLUE_73: Palette = Palette(73);
    pub const SKY_BLUE3: Palette = Palette(74);
    pub const STEEL_BLUE1_75: Palette = Palette(75);
    pub const CHARTREUSE3_76: Palette = Palette(76);
    pub const PALE_GREEN3_77: Palette = Palette(77);
    pub const SEA_GREEN3: Palette = Palette(78);
    pub const AQUAMARINE3: Palette = Palette(79);
    pub const MEDIUM_TURQUOISE: Palette = Palette(80);
    pub const STEEL_BLUE1_81: Palette = Palette(81);
    pub const CHARTREUSE2_82: Palette = Palette(82);
    pub const SEA_GREEN2: Palette = Palette(83);
    pub const SEA_GREEN1_84: Palette = Palette(84);
    pub const SEA_GREEN1_85: Palette = Palette(85);
    pub const AQUAMARINE1_86: Palette = Palette(86);
    pub const DARK_SLATE_GRAY2: Palette = Palette(87);
    pub const DARK_RED_88: Palette = Palette(88);
    pub const DEEP_PINK4_89: Palette = Palette(89);
    pub const DARK_MAGENTA_90: Palette = Palette(90);
    pub const DARK_MAGENTA_91: Palette = Palette(91);
    pub const DARK_VIOLET_92: Palette = Palette(92);
    pub const PURPLE_93: Palette = Palette(93);
    pub const ORANGE4_94: Palette = Palette(94);
    pub const LIGHT_PINK4: Palette = Palette(95);
    pub const PLUM4: Palette = Palette(96);
    pub const MEDIUM_PURPLE3_97: Palette = Palette(97);
    pub const MEDIUM_PURPLE3_98: Palette = Palette(98);
    pub const SLATE_BLUE1: Palette = Palette(99);
    pub const YELLOW4_100: Palette = Palette(100);
    pub const WHEAT4: Palette = Palette(101);
    pub const GREY53: Palette = Palette(102);
    pub const LIGHT_SLATE_GREY: Palette = Palette(103);
    pub const MEDIUM_PURPLE: Palette = Palette(104);
    pub const LIGHT_SLATE_BLUE: Palette = Palette(105);
    pub const YELLOW4_106: Palette = Palette(106);
    pub const DARK_OLIVE_GREEN3_107: Palette = Palette(107);
    pub const DARK_SEA_GREEN: Palette = Palette(108);
    pub const LIGHT_SKY_BLUE3_109: Palette = Palette(109);
    pub const LIGHT_SKY_BLUE3_110: Palette = Palette(110);
    pub const SKY_BLUE2: Palette = Palette(111);
    pub const CHARTREUSE2_112: Palette = Palette(112);
    pub const DARK_OLIVE_GREEN3_113: Palette = Palette(113);
    pub const PALE_GREEN3_114: Palette = Palette(114);
    pub const DARK_SEA_GREEN3_115: Palette = Palette(115);
    pub const DARK_SLATE_GRAY3: Palette = Palette(116);
    pub const SKY_BLUE1: Palette = Palette(117);
    pub const CHARTREUSE1: Palette = Palette(118);
    pub const LIGHT_GREEN_119: Palette = Palette(119);
    pub const LIGHT_GREEN_120: Palette = Palette(120);
    pub const PALE_GREEN1_121: Palette = Palette(121);
    pub const AQUAMARINE1_122: Palette = Palette(122);
    pub const DARK_SLATE_GRAY1: Palette = Palette(123);
    pub const RED3_124: Palette = Palette(124);
    pub const DEEP_PINK4_125: Palette = Palette(125);
    pub const MEDIUM_VIOLET_RED: Palette = Palette(126);
    pub const MAGENTA3_127: Palette = Palette(127);
    pub const DARK_VIOLET_128: Palette = Palette(128);
    pub const PURPLE_129: Palette = Palette(129);
    pub const DARK_ORANGE3_130: Palette = Palette(130);
    pub const INDIAN_RED_131: Palette = Palette(131);
    pub const HOT_PINK3_132: Palette = Palette(132);
    pub const MEDIUM_ORCHID3: Palette = Palette(133);
    pub const MEDIUM_ORCHID: Palette = Palette(134);
    pub const MEDIUM_PURPLE2_135: Palette = Palette(135);
    pub const DARK_GOLDENROD: Palette = Palette(136);
    pub const LIGHT_SALMON3_137: Palette = Palette(137);
    pub const ROSY_BROWN: Palette = Palette(138);
    pub const GREY63: Palette = Palette(139);
    pub const MEDIUM_PURPLE2_140: Palette = Palette(140);
    pub const MEDIUM_PURPLE1: Palette = Palette(141);
    pub const GOLD3_142: Palette = Palette(142);
    pub const DARK_KHAKI: Palette = Palette(143);
    pub const NAVAJO_WHITE3: Palette = Palette(144);
    pub const GREY69: Palette = Palette(145);
    pub const LIGHT_STEEL_BLUE3: Palette = Palette(146);
    pub const LIGHT_STEEL_BLUE: Palette = Palette(147);
    pub const YELLOW3_148: Palette = Palette(148);
    pub const DARK_OLIVE_GREEN3_149: Palette = Palette(149);
    pub const DARK_SEA_GREEN3_150: Palette = Palette(150);
    pub const DARK_SEA_GREEN2_151: Palette = Palette(151);
    pub const LIGHT_CYAN3: Palette = Palette(152);
    pub const LIGHT_SKY_BLUE1: Palette = Palette(153);
    pub const GREEN_YELLOW: Palette = Palette(154);
    pub const DARK_OLIVE_GREEN2: Palette = Palette(155);
    pub const PALE_GREEN1_156: Palette = Palette(156);
    pub const DARK_SEA_GREEN2_157: Palette = Palette(157);
    pub const DARK_SEA_GREEN1_158: Palette = Palette(158);
    pub const PALE_TURQUOISE1: Palette = Palette(159);
    pub const RED3_160: Palette = Palette(160);
    pub const DEEP_PINK3_161: Palette = Palette(161);
    pub const DEEP_PINK3_162: Palette = Palette(162);
    pub const MAGENTA3_163: Palette = Palette(163);
    pub const MAGENTA3_164: Palette = Palette(164);
    pub const MAGENTA2_165: Palette = Palette(165);
    pub const DARK_ORANGE3_166: Palette = Palette(166);
    pub const INDIAN_RED_167: Palette = Palette(167);
    pub const HOT_PINK3_168: Palette = Palette(168);
    pub const HOT_PINK2: Palette = Palette(169);
    pub const ORCHID: Palette = Palette(170);
    pub const MEDIUM_ORCHID1_171: Palette = Palette(171);
    pub const ORANGE3: Palette = Palette(172);
    pub const LIGHT_SALMON3_173: Palette = Palette(173);
    pub const LIGHT_PINK3: Palette = Palette(174);
    pub const PINK3: Palette = Palette(175);
    pub const PLUM3: Palette = Palette(176);
    pub const VIOLET: Palette = Palette(177);
    pub const GOLD3_178: Palette = Palette(178);
    pub const LIGHT_GOLDENROD3: Palette = Palette(179);
    pub const TAN: Palette = Palette(180);
    pub const MISTY_ROSE3: Palette = Palette(181);
    pub const THISTLE3: Palette = Palette(182);
    pub const PLUM2: Palette = Palette(183);
    pub const YELLOW3_184: Palette = Palette(184);
    pub const KHAKI3: Palette = Palette(185);
    pub const LIGHT_GOLDENROD2_186: Palette = Palette(186);
    pub const LIGHT_YELLOW3: Palette = Palette(187);
    pub const GREY84: Palette = Palette(188);
    pub const LIGHT_STEEL_BLUE1: Palette = Palette(189);
    pub const YELLOW2: Palette = Palette(190);
    pub const DARK_OLIVE_GREEN1_191: Palette = Palette(191);
    pub const DARK_OLIVE_GREEN1_192: Palette = Palette(192);
    pub const DARK_SEA_GREEN1_193: Palette = Palette(193);
    pub const HONEYDEW2: Palette = Palette(194);
    pub const LIGHT_CYAN1: Palette = Palette(195);
    pub const RED1: Palette = Palette(196);
    pub const DEEP_PINK2: Palette = Palette(197);
    pub const DEEP_PINK1_198: Palette = Palette(198);
    pub const DEEP_PINK1_199: Palette = Palette(199);
    pub const MAGENTA2_200: Palette = Palette(200);
    pub const MAGENTA1: Palette = Palette(201);
    pub const ORANGE_RED1: Palette = Palette(202);
    pub const INDIAN_RED1_203: Palette = Palette(203);
    pub const INDIAN_RED1_204: Palette = Palette(204);
    pub const HOT_PINK_205: Palette = Palette(205);
    pub const HOT_PINK_206: Palette = Palette(206);
    pub const MEDIUM_ORCHID1_207: Palette = Palette(207);
    pub const DARK_ORANGE: Palette = Palette(208);
    pub const SALMON1: Palette = Palette(209);
    pub const LIGHT_CORAL: Palette = Palette(210);
    pub const PALE_VIOLET_RED1: Palette = Palette(211);
    pub const ORCHID2: Palette = Palette(212);
    pub const ORCHID1: Palette = Palette(213);
    pub const ORANGE1: Palette = Palette(214);
    pub const SANDY_BROWN: Palette = Palette(215);
    pub const LIGHT_SALMON1: Palette = Palette(216);
    pub const LIGHT_PINK1: Palette = Palette(217);
    pub const PINK1: Palette = Palette(218);
    pub const PLUM1: Palette = Palette(219);
    pub const GOLD1: Palette = Palette(220);
    pub const LIGHT_GOLDENROD2_221: Palette = Palette(221);
    pub const LIGHT_GOLDENROD2_222: Palette = Palette(222);
    pub const NAVAJO_WHITE1: Palette = Palette(223);
    pub const MISTY_ROSE1: Palette = Palette(224);
    pub const THISTLE1: Palette = Palette(225);
    pub const YELLOW1: Palette = Palette(226);
    pub const LIGHT_GOLDENROD1: Palette = Palette(227);
    pub const KHAKI1: Palette = Palette(228);
    pub const WHEAT1: Palette = Palette(229);
    pub const CORNSILK1: Palette = Palette(230);
    pub const GREY100: Palette = Palette(231);
    pub const GREY3: Palette = Palette(232);
    pub const GREY7: Palette = Palette(233);
    pub const GREY11: Palette = Palette(234);
    pub const GREY15: Palette = Palette(235);
    pub const GREY19: Palette = Palette(236);
    pub const GREY23: Palette = Palette(237);
    pub const GREY27: Palette = Palette(238);
    pub const GREY30: Palette = Palette(239);
    pub const GREY35: Palette = Palette(240);
    pub const GREY39: Palette = Palette(241);
    pub const GREY42: Palette = Palette(242);
    pub const GREY46: Palette = Palette(243);
    pub const GREY50: Palette = Palette(244);
    pub const GREY54: Palette = Palette(245);
    pub const GREY58: Palette = Palette(246);
    pub const GREY62: Palette = Palette(247);
    pub const GREY66: Palette = Palette(248);
    pub const GREY70: Palette = Palette(249);
    pub const GREY74: Palette = Palette(250);
    pub const GREY78: Palette = Palette(251);
    pub const GREY82: Palette = Palette(252);
    pub const GREY85: Palette = Palette(253);
    pub const GREY89: Palette = Palette(254);
    pub const GREY93: Palette = Palette(255);
}

impl Palette {
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Conventional xterm name (e.g. `DeepSkyBlue3`). Not unique.
    pub fn name(self) -> &'static str {
        NAMES[usize::from(self.0)]
    }

    /// Look up an index by name.
    ///
    /// Case, `-`, `_` and spaces are ignored, so `deep-sky-blue3` matches
    /// `DeepSkyBlue3`. A name shared by several indices resolves to the
    /// lowest one.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        NAMES
            .iter()
            .position(|candidate| normalize(candidate) == wanted)
            .and_then(|i| u8::try_from(i).ok())
            .map(Self)
    }

    /// The xterm default RGB value for this index.
    pub fn to_rgb(self) -> Rgb {
        match self.0 {
            i @ 0..=15 => Rgb::from(SYSTEM_RGB[usize::from(i)]),
            i @ 16..=231 => {
                let i = i - 16;
                Rgb::new(
                    CUBE_LEVELS[usize::from(i / 36)],
                    CUBE_LEVELS[usize::from((i / 6) % 6)],
                    CUBE_LEVELS[usize::from(i % 6)],
                )
            }
            i => {
                let level = 8 + (i - 232) * 10;
                Rgb::new(level, level, level)
            }
        }
    }

    /// All 256 entries in index order.
    pub fn all() -> impl Iterator<Item = Palette> {
        (0..=u8::MAX).map(Palette)
    }
}

impl From<u8> for Palette {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.name())
    }
}

pub(crate) fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
