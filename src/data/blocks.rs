use crate::blocks::UnicodeBlock;

const fn block(name: &'static str, start: u32, end: u32) -> UnicodeBlock {
    UnicodeBlock { name, start, end }
}

/// Unicode block ranges, ascending and non-overlapping.
pub(crate) static UNICODE_BLOCKS: &[UnicodeBlock] = &[
    block("Basic Latin", 0x0000, 0x007F),
    block("Latin-1 Supplement", 0x0080, 0x00FF),
    block("Latin Extended-A", 0x0100, 0x017F),
    block("Latin Extended-B", 0x0180, 0x024F),
    block("IPA Extensions", 0x0250, 0x02AF),
    block("Spacing Modifier Letters", 0x02B0, 0x02FF),
    block("Combining Diacritical Marks", 0x0300, 0x036F),
    block("Greek and Coptic", 0x0370, 0x03FF),
    block("Cyrillic", 0x0400, 0x04FF),
    block("Cyrillic Supplement", 0x0500, 0x052F),
    block("Armenian", 0x0530, 0x058F),
    block("Hebrew", 0x0590, 0x05FF),
    block("Arabic", 0x0600, 0x06FF),
    block("Syriac", 0x0700, 0x074F),
    block("Arabic Supplement", 0x0750, 0x077F),
    block("Thaana", 0x0780, 0x07BF),
    block("NKo", 0x07C0, 0x07FF),
    block("Samaritan", 0x0800, 0x083F),
    block("Mandaic", 0x0840, 0x085F),
    block("Arabic Extended-A", 0x08A0, 0x08FF),
    block("Devanagari", 0x0900, 0x097F),
    block("Bengali", 0x0980, 0x09FF),
    block("Gurmukhi", 0x0A00, 0x0A7F),
    block("Gujarati", 0x0A80, 0x0AFF),
    block("Oriya", 0x0B00, 0x0B7F),
    block("Tamil", 0x0B80, 0x0BFF),
    block("Telugu", 0x0C00, 0x0C7F),
    block("Kannada", 0x0C80, 0x0CFF),
    block("Malayalam", 0x0D00, 0x0D7F),
    block("Sinhala", 0x0D80, 0x0DFF),
    block("Thai", 0x0E00, 0x0E7F),
    block("Lao", 0x0E80, 0x0EFF),
    block("Tibetan", 0x0F00, 0x0FFF),
    block("Myanmar", 0x1000, 0x109F),
    block("Georgian", 0x10A0, 0x10FF),
    block("Hangul Jamo", 0x1100, 0x11FF),
    block("Ethiopic", 0x1200, 0x137F),
    block("Ethiopic Supplement", 0x1380, 0x139F),
    block("Cherokee", 0x13A0, 0x13FF),
    block("Unified Canadian Aboriginal Syllabics", 0x1400, 0x167F),
    block("Ogham", 0x1680, 0x169F),
    block("Runic", 0x16A0, 0x16FF),
    block("Tagalog", 0x1700, 0x171F),
    block("Hanunoo", 0x1720, 0x173F),
    block("Buhid", 0x1740, 0x175F),
    block("Tagbanwa", 0x1760, 0x177F),
    block("Khmer", 0x1780, 0x17FF),
    block("Mongolian", 0x1800, 0x18AF),
    block("Unified Canadian Aboriginal Syllabics Extended", 0x18B0, 0x18FF),
    block("Limbu", 0x1900, 0x194F),
    block("Tai Le", 0x1950, 0x197F),
    block("New Tai Lue", 0x1980, 0x19DF),
    block("Khmer Symbols", 0x19E0, 0x19FF),
    block("Buginese", 0x1A00, 0x1A1F),
    block("Tai Tham", 0x1A20, 0x1AAF),
    block("Balinese", 0x1B00, 0x1B7F),
    block("Sundanese", 0x1B80, 0x1BBF),
    block("Batak", 0x1BC0, 0x1BFF),
    block("Lepcha", 0x1C00, 0x1C4F),
    block("Ol Chiki", 0x1C50, 0x1C7F),
    block("Sundanese Supplement", 0x1CC0, 0x1CCF),
    block("Vedic Extensions", 0x1CD0, 0x1CFF),
    block("Phonetic Extensions", 0x1D00, 0x1D7F),
    block("Phonetic Extensions Supplement", 0x1D80, 0x1DBF),
    block("Combining Diacritical Marks Supplement", 0x1DC0, 0x1DFF),
    block("Latin Extended Additional", 0x1E00, 0x1EFF),
    block("Greek Extended", 0x1F00, 0x1FFF),
    block("General Punctuation", 0x2000, 0x206F),
    block("Superscripts and Subscripts", 0x2070, 0x209F),
    block("Currency Symbols", 0x20A0, 0x20CF),
    block("Combining Diacritical Marks for Symbols", 0x20D0, 0x20FF),
    block("Letterlike Symbols", 0x2100, 0x214F),
    block("Number Forms", 0x2150, 0x218F),
    block("Arrows", 0x2190, 0x21FF),
    block("Mathematical Operators", 0x2200, 0x22FF),
    block("Miscellaneous Technical", 0x2300, 0x23FF),
    block("Control Pictures", 0x2400, 0x243F),
    block("Optical Character Recognition", 0x2440, 0x245F),
    block("Enclosed Alphanumerics", 0x2460, 0x24FF),
    block("Box Drawing", 0x2500, 0x257F),
    block("Block Elements", 0x2580, 0x259F),
    block("Geometric Shapes", 0x25A0, 0x25FF),
    block("Miscellaneous Symbols", 0x2600, 0x26FF),
    block("Dingbats", 0x2700, 0x27BF),
    block("Miscellaneous Mathematical Symbols-A", 0x27C0, 0x27EF),
    block("Supplemental Arrows-A", 0x27F0, 0x27FF),
    block("Braille Patterns", 0x2800, 0x28FF),
    block("Supplemental Arrows-B", 0x2900, 0x297F),
    block("Miscellaneous Mathematical Symbols-B", 0x2980, 0x29FF),
    block("Supplemental Mathematical Operators", 0x2A00, 0x2AFF),
    block("Miscellaneous Symbols and Arrows", 0x2B00, 0x2BFF),
    block("Glagolitic", 0x2C00, 0x2C5F),
    block("Latin Extended-C", 0x2C60, 0x2C7F),
    block("Coptic", 0x2C80, 0x2CFF),
    block("Georgian Supplement", 0x2D00, 0x2D2F),
    block("Tifinagh", 0x2D30, 0x2D7F),
    block("Ethiopic Extended", 0x2D80, 0x2DDF),
    block("Cyrillic Extended-A", 0x2DE0, 0x2DFF),
    block("Supplemental Punctuation", 0x2E00, 0x2E7F),
    block("CJK Radicals Supplement", 0x2E80, 0x2EFF),
    block("Kangxi Radicals", 0x2F00, 0x2FDF),
    block("Ideographic Description Characters", 0x2FF0, 0x2FFF),
    block("CJK Symbols and Punctuation", 0x3000, 0x303F),
    block("Hiragana", 0x3040, 0x309F),
    block("Katakana", 0x30A0, 0x30FF),
    block("Bopomofo", 0x3100, 0x312F),
    block("Hangul Compatibility Jamo", 0x3130, 0x318F),
    block("Kanbun", 0x3190, 0x319F),
    block("Bopomofo Extended", 0x31A0, 0x31BF),
    block("CJK Strokes", 0x31C0, 0x31EF),
    block("Katakana Phonetic Extensions", 0x31F0, 0x31FF),
    block("Enclosed CJK Letters and Months", 0x3200, 0x32FF),
    block("CJK Compatibility", 0x3300, 0x33FF),
    block("CJK Unified Ideographs Extension A", 0x3400, 0x4DBF),
    block("Yijing Hexagram Symbols", 0x4DC0, 0x4DFF),
    block("CJK Unified Ideographs", 0x4E00, 0x9FFF),
    block("Yi Syllables", 0xA000, 0xA48F),
    block("Yi Radicals", 0xA490, 0xA4CF),
    block("Lisu", 0xA4D0, 0xA4FF),
    block("Vai", 0xA500, 0xA63F),
    block("Cyrillic Extended-B", 0xA640, 0xA69F),
    block("Bamum", 0xA6A0, 0xA6FF),
    block("Modifier Tone Letters", 0xA700, 0xA71F),
    block("Latin Extended-D", 0xA720, 0xA7FF),
    block("Syloti Nagri", 0xA800, 0xA82F),
    block("Common Indic Number Forms", 0xA830, 0xA83F),
    block("Phags-pa", 0xA840, 0xA87F),
    block("Saurashtra", 0xA880, 0xA8DF),
    block("Devanagari Extended", 0xA8E0, 0xA8FF),
    block("Kayah Li", 0xA900, 0xA92F),
    block("Rejang", 0xA930, 0xA95F),
    block("Hangul Jamo Extended-A", 0xA960, 0xA97F),
    block("Javanese", 0xA980, 0xA9DF),
    block("Cham", 0xAA00, 0xAA5F),
    block("Myanmar Extended-A", 0xAA60, 0xAA7F),
    block("Tai Viet", 0xAA80, 0xAADF),
    block("Meetei Mayek Extensions", 0xAAE0, 0xAAFF),
    block("Ethiopic Extended-A", 0xAB00, 0xAB2F),
    block("Meetei Mayek", 0xABC0, 0xABFF),
    block("Hangul Syllables", 0xAC00, 0xD7AF),
    block("Hangul Jamo Extended-B", 0xD7B0, 0xD7FF),
    block("High Surrogates", 0xD800, 0xDB7F),
    block("High Private Use Surrogates", 0xDB80, 0xDBFF),
    block("Low Surrogates", 0xDC00, 0xDFFF),
    block("Private Use Area", 0xE000, 0xF8FF),
    block("CJK Compatibility Ideographs", 0xF900, 0xFAFF),
    block("Alphabetic Presentation Forms", 0xFB00, 0xFB4F),
    block("Arabic Presentation Forms-A", 0xFB50, 0xFDFF),
    block("Variation Selectors", 0xFE00, 0xFE0F),
    block("Vertical Forms", 0xFE10, 0xFE1F),
    block("Combining Half Marks", 0xFE20, 0xFE2F),
    block("CJK Compatibility Forms", 0xFE30, 0xFE4F),
    block("Small Form Variants", 0xFE50, 0xFE6F),
    block("Arabic Presentation Forms-B", 0xFE70, 0xFEFF),
    block("Halfwidth and fullwidth forms", 0xFF00, 0xFFEF),
    block("Specials", 0xFFF0, 0xFFFF),
    block("Linear B Syllabary", 0x10000, 0x1007F),
    block("Linear B Ideograms", 0x10080, 0x100FF),
    block("Aegean Numbers", 0x10100, 0x1013F),
    block("Ancient Greek Numbers", 0x10140, 0x1018F),
    block("Ancient Symbols", 0x10190, 0x101CF),
    block("Phaistos Disc", 0x101D0, 0x101FF),
    block("Lycian", 0x10280, 0x1029F),
    block("Carian", 0x102A0, 0x102DF),
    block("Old Italic", 0x10300, 0x1032F),
    block("Gothic", 0x10330, 0x1034F),
    block("Ugaritic", 0x10380, 0x1039F),
    block("Old Persian", 0x103A0, 0x103DF),
    block("Deseret", 0x10400, 0x1044F),
    block("Shavian", 0x10450, 0x1047F),
    block("Osmanya", 0x10480, 0x104AF),
    block("Cypriot Syllabary", 0x10800, 0x1083F),
    block("Imperial Aramaic", 0x10840, 0x1085F),
    block("Phoenician", 0x10900, 0x1091F),
    block("Lydian", 0x10920, 0x1093F),
    block("Meroitic Hieroglyphs", 0x10980, 0x1099F),
    block("Meoritic Cursive", 0x109A0, 0x109FF),
    block("Kharoshthi", 0x10A00, 0x10A5F),
    block("Old South Arabian", 0x10A60, 0x10A7F),
    block("Avestan", 0x10B00, 0x10B3F),
    block("Inscriptional Parthian", 0x10B40, 0x10B5F),
    block("Inscriptional Pahlavi", 0x10B60, 0x10B7F),
    block("Old Turkic", 0x10C00, 0x10C4F),
    block("Rumi Numeral Symbols", 0x10E60, 0x10E7F),
    block("Brahmi", 0x11000, 0x1107F),
    block("Kaithi", 0x11080, 0x110CF),
    block("Sora Sompeng", 0x110D0, 0x110FF),
    block("Chakma", 0x11100, 0x1114F),
    block("Sharada", 0x11180, 0x111DF),
    block("Takri", 0x11680, 0x116CF),
    block("Cuneiform", 0x12000, 0x123FF),
    block("Cuneiform Numbers and Punctuation", 0x12400, 0x1247F),
    block("Egyptian Hieroglyphs", 0x13000, 0x1342F),
    block("Bamum Supplement", 0x16800, 0x16A3F),
    block("Miao", 0x16F00, 0x16F9F),
    block("Kana Supplement", 0x1B000, 0x1B0FF),
    block("Byzantine Musical Symbols", 0x1D000, 0x1D0FF),
    block("Musical Symbols", 0x1D100, 0x1D1FF),
    block("Ancient Greek Musical Notation", 0x1D200, 0x1D24F),
    block("Tai Xuan Jing Symbols", 0x1D300, 0x1D35F),
    block("Counting Rod Numerals", 0x1D360, 0x1D37F),
    block("Mathematical Alphanumeric Symbols", 0x1D400, 0x1D7FF),
    block("Arabic Mathematical Alphabetic Symbols", 0x1EE00, 0x1EEFF),
    block("Mahjong Tiles", 0x1F000, 0x1F02F),
    block("Domino Tiles", 0x1F030, 0x1F09F),
    block("Playing Cards", 0x1F0A0, 0x1F0FF),
    block("Enclosed Alphanumeric Supplement", 0x1F100, 0x1F1FF),
    block("Enclosed Ideographic Supplement", 0x1F200, 0x1F2FF),
    block("Miscellaneous Symbols and Pictographs", 0x1F300, 0x1F5FF),
    block("Emoticons", 0x1F600, 0x1F64F),
    block("Transport and Map Symbols", 0x1F680, 0x1F6FF),
    block("Alchemical Symbols", 0x1F700, 0x1F77F),
    block("CJK Unified Ideographs Extension B", 0x20000, 0x2A6DF),
    block("CJK Unified Ideographs Extension C", 0x2A700, 0x2B73F),
    block("CJK Unified Ideographs Extension D", 0x2B740, 0x2B81F),
    block("CJK Compatibility Ideographs Supplement", 0x2F800, 0x2FA1F),
    block("Tags", 0xE0000, 0xE007F),
    block("Variation Selectors Supplement", 0xE0100, 0xE01EF),
    block("Supplementary Private Use Area", 0xF0000, 0xFFFFF),
    block("Supplementary Private Use Area-B", 0x100000, 0x10FFFF),
];
