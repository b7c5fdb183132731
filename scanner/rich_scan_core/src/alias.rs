//! Emoticon alias table.
//!
//! Maps short ASCII sequences to emoji glyphs. Changing entries is a data
//! change: bump [`ALIAS_TABLE_VERSION`] and the matching algorithm stays
//! the same.
//!
//! Lookup stops at the first terminal on the path, so no alias may be a
//! strict prefix of another: the shorter one would always win. The table
//! keeps `:(` and leaves out `:(|)` and `:(:)`.

/// Version of [`ALIASES`]. Incremented whenever an entry is added, removed,
/// or remapped.
pub const ALIAS_TABLE_VERSION: u32 = 2;

/// `(alias, glyph)` pairs.
///
/// `:/` is deliberately absent: it would fire inside `http://` whenever a
/// link is not recognized.
pub const ALIASES: &[(&str, &str)] = &[
    (":C", "☹️"),
    (":c", "☹️"),
    (":)", "🙂"),
    (":-)", "🙂"),
    ("<3", "❤️"),
    ("(]:{", "👳"),
    ("</3", "💔"),
    ("~@~", "💩"),
    (":D", "😀"),
    (":-D", "😀"),
    ("^_^", "😁"),
    ("=D", "😄"),
    (":-@", "😣"),
    (":-S", "😖"),
    ("O:)", "😇"),
    ("O=)", "😇"),
    ("O:-)", "😇"),
    ("}:)", "😈"),
    ("}=)", "😈"),
    ("}:-)", "😈"),
    (";)", "😉"),
    (";-)", "😉"),
    ("=)", "🙂"),
    ("^^", "😊"),
    ("B-)", "😎"),
    (":,", "😏"),
    (":-,", "😏"),
    (":|", "😐"),
    ("=|", "😐"),
    (":-|", "😐"),
    ("-_-", "😑"),
    ("u_u", "😔"),
    ("=/", "😕"),
    (":-/", "😕"),
    (":-\\", "😕"),
    (":s", "😖"),
    (":-s", "😖"),
    (":*", "😗"),
    (":-*", "😗"),
    (";*", "😘"),
    (";-*", "😘"),
    ("=*", "😚"),
    (":p", "😛"),
    (":P", "😛"),
    (":-p", "😛"),
    (":-P", "😛"),
    ("=p", "😛"),
    ("=P", "😛"),
    (";p", "😜"),
    (";P", "😜"),
    (";-p", "😜"),
    (";-P", "😜"),
    (":(", "🙁"),
    (":-(", "🙁"),
    ("=(", "🙁"),
    (">:(", "😡"),
    (":'(", "😢"),
    ("='(", "😢"),
    ("T_T", "😭"),
    (";_;", "😭"),
    (">.<", "😣"),
    (">_<", "😣"),
    ("D:", "😦"),
    (":o", "😮"),
    (":O", "😮"),
    ("=o", "😮"),
    ("=O", "😮"),
    (":-O", "😮"),
    (":-o", "😮"),
    ("o.o", "😮"),
    ("O.O", "😲"),
    ("x_x", "😵"),
    ("X(", "😵"),
    ("X-(", "😵"),
    ("X-o", "😵"),
    ("X-O", "😵"),
    (":3", "😸"),
    ("o/", "🙋"),
    ("\\o", "🙋"),
    ("\\m/", "🤘"),
    (":-$", "🤐"),
    (":$", "🤐"),
    ("*-)", "😐"),
    (":-I", "😠"),
    (":I", "😠"),
    ("8oI", "😡"),
    ("8o|", "😡"),
    ("|-)", "😪"),
    ("(ch)", "😏"),
    ("(lo)", "😍"),
    ("(sr)", "😔"),
    ("|-(", "😴"),
    ("(y)", "👍"),
    ("(Y)", "👍"),
    ("(n)", "👎"),
    ("(N)", "👎"),
    ("(H)", "😎"),
    ("(hu)", "😬"),
    ("(tr)", "😒"),
    ("(md)", "😵"),
    ("(fr)", "😄"),
    ("(dt)", "😟"),
    ("(sc)", "😕"),
    ("(v)", "✌️"),
    ("(L)", "❤️"),
    ("(U)", "💔"),
    ("(K)", "💋"),
    ("(F)", "🌼"),
    ("(*)", "⭐"),
    ("(^)", "🎂"),
    ("(G)", "🎁"),
    ("(B)", "🍺"),
    ("(D)", "🍸"),
    ("(CC)", "🎂"),
    ("(pi)", "🍕"),
    ("(pl)", "🍴"),
    ("(ic)", "🍦"),
    ("($)", "💰"),
    ("(co)", "💻"),
    ("(so)", "⚽"),
    ("(te)", "🎾"),
    ("(nt)", "🎵"),
    ("(I)", "💡"),
    ("(E)", "✉️"),
    ("(Z)", "👦"),
    ("(X)", "👧"),
    ("(S)", "🌙"),
    ("(facepalm)", "🤦"),
];
