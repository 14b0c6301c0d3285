//! Tailwind utility class groups
//!
//! Each utility class sets one CSS property (or a shorthand covering several).
//! Two classes in the same group under the same variants conflict, and the
//! later one wins. Shorthand groups also override their longhands, so `p-4`
//! replaces an earlier `px-2`, but `px-2` after `p-4` refines it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Box edge, axis or corner a spacing/border/inset utility applies to.
///
/// Corners only occur in border radius utilities. `StartEnd` is the
/// `border-start-end-radius` corner (`rounded-se`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    All,
    X,
    Y,
    Top,
    Right,
    Bottom,
    Left,
    Start,
    End,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    StartStart,
    StartEnd,
    EndStart,
    EndEnd,
}

impl Edge {
    /// Edges a utility on `self` fully covers.
    fn covered(self) -> &'static [Edge] {
        match self {
            Edge::All => &[
                Edge::X,
                Edge::Y,
                Edge::Top,
                Edge::Right,
                Edge::Bottom,
                Edge::Left,
                Edge::Start,
                Edge::End,
            ],
            Edge::X => &[Edge::Right, Edge::Left],
            Edge::Y => &[Edge::Top, Edge::Bottom],
            _ => &[],
        }
    }

    /// Corner radii a radius utility on `self` also sets.
    fn corners(self) -> &'static [Edge] {
        match self {
            Edge::All => &[
                Edge::TopLeft,
                Edge::TopRight,
                Edge::BottomRight,
                Edge::BottomLeft,
                Edge::StartStart,
                Edge::StartEnd,
                Edge::EndStart,
                Edge::EndEnd,
            ],
            Edge::Top => &[Edge::TopLeft, Edge::TopRight],
            Edge::Right => &[Edge::TopRight, Edge::BottomRight],
            Edge::Bottom => &[Edge::BottomRight, Edge::BottomLeft],
            Edge::Left => &[Edge::TopLeft, Edge::BottomLeft],
            Edge::Start => &[Edge::StartStart, Edge::EndStart],
            Edge::End => &[Edge::StartEnd, Edge::EndEnd],
            _ => &[],
        }
    }

    fn corner_from_abbrev(abbrev: &str) -> Option<Edge> {
        match abbrev {
            "tl" => Some(Edge::TopLeft),
            "tr" => Some(Edge::TopRight),
            "br" => Some(Edge::BottomRight),
            "bl" => Some(Edge::BottomLeft),
            "ss" => Some(Edge::StartStart),
            "se" => Some(Edge::StartEnd),
            "es" => Some(Edge::EndStart),
            "ee" => Some(Edge::EndEnd),
            _ => None,
        }
    }

    fn from_abbrev(abbrev: &str) -> Option<Edge> {
        match abbrev {
            "x" => Some(Edge::X),
            "y" => Some(Edge::Y),
            "t" => Some(Edge::Top),
            "r" => Some(Edge::Right),
            "b" => Some(Edge::Bottom),
            "l" => Some(Edge::Left),
            "s" => Some(Edge::Start),
            "e" => Some(Edge::End),
            _ => None,
        }
    }
}

/// The CSS property a utility class sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassGroup {
    // Layout
    Display,
    Position,
    Visibility,
    Isolation,
    ZIndex,
    Overflow(Edge),
    Inset(Edge),
    ObjectFit,
    ObjectPosition,
    AspectRatio,
    ScreenReaders,
    Float,
    Clear,
    BoxSizing,

    // Flexbox & grid
    FlexDirection,
    FlexWrap,
    Flex,
    FlexBasis,
    Grow,
    Shrink,
    Order,
    GridCols,
    GridRows,
    ColSpan,
    RowSpan,
    Gap(Edge),
    ColStart,
    ColEnd,
    RowStart,
    RowEnd,
    JustifyContent,
    JustifyItems,
    JustifySelf,
    AlignContent,
    AlignItems,
    AlignSelf,
    PlaceContent,
    PlaceItems,
    PlaceSelf,

    // Spacing
    Padding(Edge),
    Margin(Edge),
    SpaceX,
    SpaceY,

    // Sizing
    Width,
    MinWidth,
    MaxWidth,
    Height,
    MinHeight,
    MaxHeight,
    Size,

    // Typography
    FontFamily,
    FontSize,
    FontWeight,
    FontStyle,
    FontSmoothing,
    LetterSpacing,
    LineHeight,
    LineClamp,
    TextAlign,
    TextColor,
    TextOpacity,
    PlaceholderOpacity,
    TextDecoration,
    TextDecorationColor,
    TextDecorationStyle,
    TextDecorationThickness,
    UnderlineOffset,
    TextTransform,
    TextOverflow,
    TextWrap,
    Whitespace,
    ListStyleType,
    ListStylePosition,
    ListStyleImage,

    // Backgrounds
    BackgroundAttachment,
    BackgroundClip,
    BackgroundColor,
    BackgroundOpacity,
    BackgroundImage,
    BackgroundPosition,
    BackgroundRepeat,
    BackgroundSize,
    GradientFrom,
    GradientFromPosition,
    GradientVia,
    GradientViaPosition,
    GradientTo,
    GradientToPosition,

    // Borders
    Rounded(Edge),
    BorderWidth(Edge),
    BorderColor(Edge),
    BorderOpacity,
    DivideOpacity,
    BorderStyle,
    BorderCollapse,
    BorderSpacing,
    OutlineWidth,
    OutlineColor,
    OutlineStyle,
    OutlineOffset,
    RingWidth,
    RingColor,
    RingOpacity,
    RingInset,
    RingOffsetWidth,
    RingOffsetColor,

    // Effects & filters
    Shadow,
    ShadowColor,
    Opacity,
    MixBlend,
    Blur,
    Brightness,
    Contrast,
    Grayscale,
    DropShadow,
    BackdropBlur,

    // Transitions, animation & transforms
    Transition,
    Duration,
    Easing,
    Delay,
    Animation,
    Scale,
    ScaleX,
    ScaleY,
    Rotate,
    TranslateX,
    TranslateY,
    SkewX,
    SkewY,
    TransformOrigin,

    // Interactivity
    Cursor,
    PointerEvents,
    UserSelect,
}

impl ClassGroup {
    /// Groups whose earlier classes are removed when a class of `self` is kept.
    pub fn overridden(self) -> Vec<ClassGroup> {
        use ClassGroup::*;
        match self {
            Padding(edge) => edge.covered().iter().map(|&e| Padding(e)).collect(),
            Margin(edge) => edge.covered().iter().map(|&e| Margin(e)).collect(),
            Inset(edge) => edge.covered().iter().map(|&e| Inset(e)).collect(),
            Gap(edge) => edge.covered().iter().map(|&e| Gap(e)).collect(),
            Overflow(edge) => edge.covered().iter().map(|&e| Overflow(e)).collect(),
            Rounded(edge) => edge
                .covered()
                .iter()
                .chain(edge.corners())
                .map(|&e| Rounded(e))
                .collect(),
            BorderWidth(edge) => edge.covered().iter().map(|&e| BorderWidth(e)).collect(),
            BorderColor(edge) => edge.covered().iter().map(|&e| BorderColor(e)).collect(),
            Size => vec![Width, Height],
            Scale => vec![ScaleX, ScaleY],
            // Font size utilities set a line height too
            FontSize => vec![LineHeight],
            _ => Vec::new(),
        }
    }
}

/// Whole-class keywords.
static KEYWORDS: Lazy<HashMap<&'static str, ClassGroup>> = Lazy::new(|| {
    use ClassGroup::*;
    let mut map = HashMap::new();
    for display in [
        "block",
        "inline-block",
        "inline",
        "flex",
        "inline-flex",
        "table",
        "inline-table",
        "table-caption",
        "table-cell",
        "table-column",
        "table-column-group",
        "table-footer-group",
        "table-header-group",
        "table-row-group",
        "table-row",
        "flow-root",
        "grid",
        "inline-grid",
        "contents",
        "list-item",
        "hidden",
    ] {
        map.insert(display, Display);
    }
    for position in ["static", "fixed", "absolute", "relative", "sticky"] {
        map.insert(position, Position);
    }
    for (keyword, group) in [
        ("visible", Visibility),
        ("invisible", Visibility),
        ("collapse", Visibility),
        ("isolate", Isolation),
        ("isolation-auto", Isolation),
        ("sr-only", ScreenReaders),
        ("not-sr-only", ScreenReaders),
        ("grow", Grow),
        ("shrink", Shrink),
        ("italic", FontStyle),
        ("not-italic", FontStyle),
        ("antialiased", FontSmoothing),
        ("subpixel-antialiased", FontSmoothing),
        ("underline", TextDecoration),
        ("overline", TextDecoration),
        ("line-through", TextDecoration),
        ("no-underline", TextDecoration),
        ("uppercase", TextTransform),
        ("lowercase", TextTransform),
        ("capitalize", TextTransform),
        ("normal-case", TextTransform),
        ("truncate", TextOverflow),
        ("box-border", BoxSizing),
        ("box-content", BoxSizing),
        ("border", BorderWidth(Edge::All)),
        ("rounded", Rounded(Edge::All)),
        ("outline", OutlineStyle),
        ("ring", RingWidth),
        ("ring-inset", RingInset),
        ("shadow", Shadow),
        ("blur", Blur),
        ("grayscale", Grayscale),
        ("drop-shadow", DropShadow),
        ("transition", Transition),
    ] {
        map.insert(keyword, group);
    }
    map
});

/// `prefix-<value>` utilities whose group does not depend on the value.
/// Longer prefixes come before the shorter prefixes they extend.
const PREFIXES: &[(&str, ClassGroup)] = &[
    ("min-w-", ClassGroup::MinWidth),
    ("max-w-", ClassGroup::MaxWidth),
    ("min-h-", ClassGroup::MinHeight),
    ("max-h-", ClassGroup::MaxHeight),
    ("w-", ClassGroup::Width),
    ("h-", ClassGroup::Height),
    ("size-", ClassGroup::Size),
    ("px-", ClassGroup::Padding(Edge::X)),
    ("py-", ClassGroup::Padding(Edge::Y)),
    ("pt-", ClassGroup::Padding(Edge::Top)),
    ("pr-", ClassGroup::Padding(Edge::Right)),
    ("pb-", ClassGroup::Padding(Edge::Bottom)),
    ("pl-", ClassGroup::Padding(Edge::Left)),
    ("ps-", ClassGroup::Padding(Edge::Start)),
    ("pe-", ClassGroup::Padding(Edge::End)),
    ("p-", ClassGroup::Padding(Edge::All)),
    ("mx-", ClassGroup::Margin(Edge::X)),
    ("my-", ClassGroup::Margin(Edge::Y)),
    ("mt-", ClassGroup::Margin(Edge::Top)),
    ("mr-", ClassGroup::Margin(Edge::Right)),
    ("mb-", ClassGroup::Margin(Edge::Bottom)),
    ("ml-", ClassGroup::Margin(Edge::Left)),
    ("ms-", ClassGroup::Margin(Edge::Start)),
    ("me-", ClassGroup::Margin(Edge::End)),
    ("m-", ClassGroup::Margin(Edge::All)),
    ("space-x-", ClassGroup::SpaceX),
    ("space-y-", ClassGroup::SpaceY),
    ("gap-x-", ClassGroup::Gap(Edge::X)),
    ("gap-y-", ClassGroup::Gap(Edge::Y)),
    ("gap-", ClassGroup::Gap(Edge::All)),
    ("inset-x-", ClassGroup::Inset(Edge::X)),
    ("inset-y-", ClassGroup::Inset(Edge::Y)),
    ("inset-", ClassGroup::Inset(Edge::All)),
    ("top-", ClassGroup::Inset(Edge::Top)),
    ("right-", ClassGroup::Inset(Edge::Right)),
    ("bottom-", ClassGroup::Inset(Edge::Bottom)),
    ("left-", ClassGroup::Inset(Edge::Left)),
    ("start-", ClassGroup::Inset(Edge::Start)),
    ("end-", ClassGroup::Inset(Edge::End)),
    ("overflow-x-", ClassGroup::Overflow(Edge::X)),
    ("overflow-y-", ClassGroup::Overflow(Edge::Y)),
    ("overflow-", ClassGroup::Overflow(Edge::All)),
    ("z-", ClassGroup::ZIndex),
    ("opacity-", ClassGroup::Opacity),
    ("order-", ClassGroup::Order),
    ("basis-", ClassGroup::FlexBasis),
    ("grow-", ClassGroup::Grow),
    ("shrink-", ClassGroup::Shrink),
    ("grid-cols-", ClassGroup::GridCols),
    ("grid-rows-", ClassGroup::GridRows),
    ("col-span-", ClassGroup::ColSpan),
    ("col-start-", ClassGroup::ColStart),
    ("col-end-", ClassGroup::ColEnd),
    ("row-span-", ClassGroup::RowSpan),
    ("row-start-", ClassGroup::RowStart),
    ("row-end-", ClassGroup::RowEnd),
    ("place-content-", ClassGroup::PlaceContent),
    ("place-items-", ClassGroup::PlaceItems),
    ("place-self-", ClassGroup::PlaceSelf),
    ("float-", ClassGroup::Float),
    ("clear-", ClassGroup::Clear),
    ("justify-items-", ClassGroup::JustifyItems),
    ("justify-self-", ClassGroup::JustifySelf),
    ("justify-", ClassGroup::JustifyContent),
    ("content-", ClassGroup::AlignContent),
    ("items-", ClassGroup::AlignItems),
    ("self-", ClassGroup::AlignSelf),
    ("aspect-", ClassGroup::AspectRatio),
    ("leading-", ClassGroup::LineHeight),
    ("tracking-", ClassGroup::LetterSpacing),
    ("line-clamp-", ClassGroup::LineClamp),
    ("whitespace-", ClassGroup::Whitespace),
    ("underline-offset-", ClassGroup::UnderlineOffset),
    ("mix-blend-", ClassGroup::MixBlend),
    ("backdrop-blur-", ClassGroup::BackdropBlur),
    ("blur-", ClassGroup::Blur),
    ("brightness-", ClassGroup::Brightness),
    ("contrast-", ClassGroup::Contrast),
    ("grayscale-", ClassGroup::Grayscale),
    ("drop-shadow-", ClassGroup::DropShadow),
    ("transition-", ClassGroup::Transition),
    ("duration-", ClassGroup::Duration),
    ("ease-", ClassGroup::Easing),
    ("delay-", ClassGroup::Delay),
    ("animate-", ClassGroup::Animation),
    ("scale-x-", ClassGroup::ScaleX),
    ("scale-y-", ClassGroup::ScaleY),
    ("scale-", ClassGroup::Scale),
    ("rotate-", ClassGroup::Rotate),
    ("translate-x-", ClassGroup::TranslateX),
    ("translate-y-", ClassGroup::TranslateY),
    ("skew-x-", ClassGroup::SkewX),
    ("skew-y-", ClassGroup::SkewY),
    ("origin-", ClassGroup::TransformOrigin),
    ("cursor-", ClassGroup::Cursor),
    ("pointer-events-", ClassGroup::PointerEvents),
    ("select-", ClassGroup::UserSelect),
];

/// Legacy `*-opacity-<value>` utilities. They share a prefix with the
/// value-dependent color utilities, so they are matched first.
const OPACITY_PREFIXES: &[(&str, ClassGroup)] = &[
    ("bg-opacity-", ClassGroup::BackgroundOpacity),
    ("text-opacity-", ClassGroup::TextOpacity),
    ("border-opacity-", ClassGroup::BorderOpacity),
    ("ring-opacity-", ClassGroup::RingOpacity),
    ("divide-opacity-", ClassGroup::DivideOpacity),
    ("placeholder-opacity-", ClassGroup::PlaceholderOpacity),
];

const TSHIRT_SIZES: &[&str] = &[
    "xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const RADIUS_SIZES: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "dvh", "svh", "lvh", "ch", "ex", "pt",
];

fn arbitrary_inner(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

/// `[14px]`, `[2.5rem]`, `[length:var(--x)]`, `[calc(...)]`
fn is_arbitrary_length(value: &str) -> bool {
    let Some(inner) = arbitrary_inner(value) else {
        return false;
    };
    if inner.starts_with("length:") || inner.starts_with("calc(") {
        return true;
    }
    if inner.parse::<f64>().is_ok() {
        return true;
    }
    LENGTH_UNITS.iter().any(|unit| {
        inner
            .strip_suffix(unit)
            .is_some_and(|number| number.parse::<f64>().is_ok())
    })
}

fn is_number(value: &str) -> bool {
    value.parse::<f64>().is_ok()
}

fn is_length(value: &str) -> bool {
    is_number(value) || value == "px" || is_arbitrary_length(value)
}

fn text_group(value: &str) -> ClassGroup {
    match value {
        "left" | "center" | "right" | "justify" | "start" | "end" => ClassGroup::TextAlign,
        "ellipsis" | "clip" => ClassGroup::TextOverflow,
        "wrap" | "nowrap" | "balance" | "pretty" => ClassGroup::TextWrap,
        _ if TSHIRT_SIZES.contains(&value) || is_arbitrary_length(value) => ClassGroup::FontSize,
        _ => ClassGroup::TextColor,
    }
}

fn background_group(value: &str) -> ClassGroup {
    match value {
        "auto" | "cover" | "contain" => ClassGroup::BackgroundSize,
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => ClassGroup::BackgroundPosition,
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            ClassGroup::BackgroundRepeat
        }
        "fixed" | "local" | "scroll" => ClassGroup::BackgroundAttachment,
        "none" => ClassGroup::BackgroundImage,
        _ if value.starts_with("gradient-to-") || value.starts_with("[url(") => {
            ClassGroup::BackgroundImage
        }
        _ if value.starts_with("clip-") => ClassGroup::BackgroundClip,
        _ if value.starts_with("[length:") || value.starts_with("[size:") => {
            ClassGroup::BackgroundSize
        }
        _ => ClassGroup::BackgroundColor,
    }
}

/// Splits `t-2` into (`Top`, `Some("2")`) and `x` into (`X`, `None`).
fn split_edge(value: &str) -> Option<(Edge, Option<&str>)> {
    let (head, rest) = match value.split_once('-') {
        Some((head, rest)) => (head, Some(rest)),
        None => (value, None),
    };
    Edge::from_abbrev(head).map(|edge| (edge, rest))
}

fn border_group(value: &str) -> ClassGroup {
    if is_length(value) {
        return ClassGroup::BorderWidth(Edge::All);
    }
    match value {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => {
            return ClassGroup::BorderStyle
        }
        "collapse" | "separate" => return ClassGroup::BorderCollapse,
        _ => {}
    }
    if value.starts_with("spacing") {
        return ClassGroup::BorderSpacing;
    }
    match split_edge(value) {
        Some((edge, None)) => ClassGroup::BorderWidth(edge),
        Some((edge, Some(rest))) if is_length(rest) => ClassGroup::BorderWidth(edge),
        Some((edge, Some(_))) => ClassGroup::BorderColor(edge),
        None => ClassGroup::BorderColor(Edge::All),
    }
}

fn rounded_group(value: &str) -> Option<ClassGroup> {
    if RADIUS_SIZES.contains(&value) || arbitrary_inner(value).is_some() {
        return Some(ClassGroup::Rounded(Edge::All));
    }
    let head = value.split_once('-').map_or(value, |(head, _)| head);
    if let Some(corner) = Edge::corner_from_abbrev(head) {
        return Some(ClassGroup::Rounded(corner));
    }
    match split_edge(value)? {
        (Edge::X | Edge::Y, _) => None,
        (edge, _) => Some(ClassGroup::Rounded(edge)),
    }
}

/// `from-`, `via-` and `to-` take either a color or a stop position.
fn gradient_stop_group(value: &str, color: ClassGroup, position: ClassGroup) -> ClassGroup {
    let is_position = value.strip_suffix('%').is_some_and(is_number) || is_arbitrary_length(value);
    if is_position {
        position
    } else {
        color
    }
}

fn decoration_group(value: &str) -> ClassGroup {
    match value {
        "solid" | "double" | "dotted" | "dashed" | "wavy" => ClassGroup::TextDecorationStyle,
        "auto" | "from-font" => ClassGroup::TextDecorationThickness,
        _ if is_length(value) => ClassGroup::TextDecorationThickness,
        _ => ClassGroup::TextDecorationColor,
    }
}

fn list_group(value: &str) -> ClassGroup {
    match value {
        "inside" | "outside" => ClassGroup::ListStylePosition,
        _ if value.starts_with("image-") => ClassGroup::ListStyleImage,
        _ => ClassGroup::ListStyleType,
    }
}

fn font_group(value: &str) -> ClassGroup {
    let numeric_weight = arbitrary_inner(value).is_some_and(is_number);
    if FONT_WEIGHTS.contains(&value) || numeric_weight {
        ClassGroup::FontWeight
    } else {
        ClassGroup::FontFamily
    }
}

fn flex_group(value: &str) -> ClassGroup {
    match value {
        "row" | "row-reverse" | "col" | "col-reverse" => ClassGroup::FlexDirection,
        "wrap" | "wrap-reverse" | "nowrap" => ClassGroup::FlexWrap,
        _ if value.starts_with("grow") => ClassGroup::Grow,
        _ if value.starts_with("shrink") => ClassGroup::Shrink,
        _ => ClassGroup::Flex,
    }
}

fn outline_group(value: &str) -> ClassGroup {
    match value {
        "none" | "dashed" | "dotted" | "double" => ClassGroup::OutlineStyle,
        _ if is_length(value) => ClassGroup::OutlineWidth,
        _ => ClassGroup::OutlineColor,
    }
}

fn value_after<'a>(utility: &'a str, prefix: &str) -> Option<&'a str> {
    utility.strip_prefix(prefix).filter(|value| !value.is_empty())
}

/// Classify a bare utility (no variants, `!` or `-` sign) into its group.
///
/// Returns `None` for classes that are not known utilities; those never
/// conflict with anything but exact duplicates.
pub fn classify(utility: &str) -> Option<ClassGroup> {
    if let Some(group) = KEYWORDS.get(utility) {
        return Some(*group);
    }
    if let Some((_, group)) = OPACITY_PREFIXES
        .iter()
        .find(|(prefix, _)| value_after(utility, prefix).is_some())
    {
        return Some(*group);
    }

    if let Some(value) = value_after(utility, "text-") {
        return Some(text_group(value));
    }
    if let Some(value) = value_after(utility, "bg-") {
        return Some(background_group(value));
    }
    if let Some(value) = value_after(utility, "border-") {
        return Some(border_group(value));
    }
    if let Some(value) = value_after(utility, "font-") {
        return Some(font_group(value));
    }
    if let Some(value) = value_after(utility, "rounded-") {
        return rounded_group(value);
    }
    if let Some(value) = value_after(utility, "flex-") {
        return Some(flex_group(value));
    }
    if value_after(utility, "outline-offset-").is_some() {
        return Some(ClassGroup::OutlineOffset);
    }
    if let Some(value) = value_after(utility, "outline-") {
        return Some(outline_group(value));
    }
    if let Some(value) = value_after(utility, "ring-offset-") {
        return Some(if is_length(value) {
            ClassGroup::RingOffsetWidth
        } else {
            ClassGroup::RingOffsetColor
        });
    }
    if let Some(value) = value_after(utility, "ring-") {
        return Some(if is_length(value) {
            ClassGroup::RingWidth
        } else {
            ClassGroup::RingColor
        });
    }
    if let Some(value) = value_after(utility, "shadow-") {
        return Some(if SHADOW_SIZES.contains(&value) || arbitrary_inner(value).is_some() {
            ClassGroup::Shadow
        } else {
            ClassGroup::ShadowColor
        });
    }
    if let Some(value) = value_after(utility, "from-") {
        return Some(gradient_stop_group(
            value,
            ClassGroup::GradientFrom,
            ClassGroup::GradientFromPosition,
        ));
    }
    if let Some(value) = value_after(utility, "via-") {
        return Some(gradient_stop_group(
            value,
            ClassGroup::GradientVia,
            ClassGroup::GradientViaPosition,
        ));
    }
    if let Some(value) = value_after(utility, "to-") {
        return Some(gradient_stop_group(
            value,
            ClassGroup::GradientTo,
            ClassGroup::GradientToPosition,
        ));
    }
    if let Some(value) = value_after(utility, "decoration-") {
        return Some(decoration_group(value));
    }
    if let Some(value) = value_after(utility, "list-") {
        return Some(list_group(value));
    }
    if let Some(value) = value_after(utility, "object-") {
        return Some(match value {
            "contain" | "cover" | "fill" | "none" | "scale-down" => ClassGroup::ObjectFit,
            _ => ClassGroup::ObjectPosition,
        });
    }

    PREFIXES
        .iter()
        .find(|(prefix, _)| value_after(utility, prefix).is_some())
        .map(|(_, group)| *group)
}
