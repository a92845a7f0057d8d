//! CSS snippet definitions: either a property with `|`-separated value
//! alternatives or a raw text template with `${N}` placeholders.

pub(crate) const SNIPPETS: &[(&str, &str)] = &[
	("@f", "@font-face {\n\tfont-family: ${1};\n\tsrc: url(${2});\n}"),
	("@i|@import", "@import url(${0});"),
	("@kf", "@keyframes ${1:identifier} {\n\t${2}\n}"),
	("@m|@media", "@media ${1:screen} {\n\t${0}\n}"),
	("ac", "align-content:start|end|flex-start|flex-end|center|space-between|space-around|stretch|space-evenly"),
	("ai", "align-items:start|end|flex-start|flex-end|center|baseline|stretch"),
	("as", "align-self:start|end|auto|flex-start|flex-end|center|baseline|stretch"),
	("anim", "animation:${1:name} ${2:duration} ${3:timing-function} ${4:delay} ${5:iteration-count} ${6:direction} ${7:fill-mode}"),
	("animdel", "animation-delay:time"),
	("animdir", "animation-direction:normal|reverse|alternate|alternate-reverse"),
	("animdur", "animation-duration:${1:0}s"),
	("animfm", "animation-fill-mode:both|forwards|backwards"),
	("animic", "animation-iteration-count:1|infinite"),
	("animn", "animation-name"),
	("animps", "animation-play-state:running|paused"),
	("animtf", "animation-timing-function:linear|ease|ease-in|ease-out|ease-in-out|cubic-bezier(${1:0.1}, ${2:0.7}, ${3:1.0}, ${3:0.1})"),
	("ap", "appearance:none"),
	("b", "bottom"),
	("bd", "border:${1:1px} ${2:solid} ${3:#000}"),
	("bdb", "border-bottom:${1:1px} ${2:solid} ${3:#000}"),
	("bdbc", "border-bottom-color:${1:#000}"),
	("bdbi", "border-image:url(${0})"),
	("bdbk", "border-break:close"),
	("bdbs", "border-bottom-style"),
	("bdbw", "border-bottom-width"),
	("bdc", "border-color:${1:#000}"),
	("bdcl", "border-collapse:collapse|separate"),
	("bdf", "border-fit:repeat|clip|scale|stretch|overwrite|overflow|space"),
	("bdi", "border-image:url(${0})"),
	("bdl", "border-left:${1:1px} ${2:solid} ${3:#000}"),
	("bdlc", "border-left-color:${1:#000}"),
	("bdls", "border-left-style"),
	("bdlw", "border-left-width"),
	("bdr", "border-right:${1:1px} ${2:solid} ${3:#000}"),
	("bdrc", "border-right-color:${1:#000}"),
	("bdrs", "border-radius"),
	("bdrst", "border-right-style"),
	("bdrw", "border-right-width"),
	("bds", "border-style:none|hidden|dotted|dashed|solid|double|dot-dash|dot-dot-dash|wave|groove|ridge|inset|outset"),
	("bdsp", "border-spacing"),
	("bdt", "border-top:${1:1px} ${2:solid} ${3:#000}"),
	("bdtc", "border-top-color:${1:#000}"),
	("bdts", "border-top-style"),
	("bdtw", "border-top-width"),
	("bdw", "border-width"),
	("bfv", "backface-visibility:hidden|visible"),
	("bg", "background:${1:#000}"),
	("bga", "background-attachment:fixed|scroll"),
	("bgbk", "background-break:bounding-box|each-box|continuous"),
	("bgc", "background-color:${1:#fff}"),
	("bgcp", "background-clip:padding-box|border-box|content-box|no-clip"),
	("bgi", "background-image:url(${0})"),
	("bgo", "background-origin:padding-box|border-box|content-box"),
	("bgp", "background-position:${1:0} ${2:0}"),
	("bgpx", "background-position-x"),
	("bgpy", "background-position-y"),
	("bgr", "background-repeat:no-repeat|repeat-x|repeat-y|space|round"),
	("bgsz", "background-size:contain|cover"),
	("bxsh", "box-shadow:${1:inset }${2:hoff} ${3:voff} ${4:blur} ${5:#000}|none"),
	("bxsz", "box-sizing:border-box|content-box"),
	("c", "color:${1:#000}"),
	("cr", "color:rgb(${1:0}, ${2:0}, ${3:0})"),
	("cra", "color:rgba(${1:0}, ${2:0}, ${3:0}, ${4:.5})"),
	("cl", "clear:both|left|right|none"),
	("cm", "/* ${0} */"),
	("cnt", "content:'${0}'|normal|open-quote|no-open-quote|close-quote|no-close-quote|attr(${0})|counter(${0})|counters(${0})"),
	("coi", "counter-increment"),
	("colm", "columns"),
	("colmc", "column-count"),
	("colmf", "column-fill"),
	("colmg", "column-gap"),
	("colmr", "column-rule"),
	("colmrc", "column-rule-color"),
	("colmrs", "column-rule-style"),
	("colmrw", "column-rule-width"),
	("colms", "column-span"),
	("colmw", "column-width"),
	("cor", "counter-reset"),
	("cp", "clip:auto|rect(${1:top} ${2:right} ${3:bottom} ${4:left})"),
	("cps", "caption-side:top|bottom"),
	("cur", "cursor:pointer|auto|default|crosshair|hand|help|move|pointer|text"),
	("d", "display:block|none|flex|inline-flex|inline|inline-block|grid|inline-grid|subgrid|list-item|run-in|compact|table|inline-table|table-caption|table-column|table-column-group|table-header-group|table-footer-group|table-row|table-row-group|contents|ruby|ruby-base|ruby-base-group|ruby-text|ruby-text-group"),
	("ec", "empty-cells:show|hide"),
	("f", "font:${1:1em} ${2:sans-serif}"),
	("fd", "font-display:auto|block|swap|fallback|optional"),
	("fef", "font-effect:none|engrave|emboss|outline"),
	("fem", "font-emphasize"),
	("femp", "font-emphasize-position:before|after"),
	("fems", "font-emphasize-style:none|accent|dot|circle|disc"),
	("ff", "font-family:serif|sans-serif|cursive|fantasy|monospace"),
	("fft", "font-family:\"Times New Roman\", Times, Baskerville, Georgia, serif"),
	("ffa", "font-family:Arial, \"Helvetica Neue\", Helvetica, sans-serif"),
	("ffv", "font-family:Verdana, Geneva, sans-serif"),
	("fl", "float:left|right|none"),
	("fs", "font-style:italic|normal|oblique"),
	("fsm", "font-smoothing:antialiased|subpixel-antialiased|none"),
	("fst", "font-stretch:normal|ultra-condensed|extra-condensed|condensed|semi-condensed|semi-expanded|expanded|extra-expanded|ultra-expanded"),
	("fv", "font-variant:normal|small-caps"),
	("fvs", "font-variation-settings:normal|inherit|initial|unset"),
	("fw", "font-weight:normal|bold|bolder|lighter"),
	("fx", "flex"),
	("fxb", "flex-basis:fill|max-content|min-content|fit-content|content"),
	("fxd", "flex-direction:row|row-reverse|column|column-reverse"),
	("fxf", "flex-flow"),
	("fxg", "flex-grow"),
	("fxsh", "flex-shrink"),
	("fxw", "flex-wrap:nowrap|wrap|wrap-reverse"),
	("fsz", "font-size"),
	("fsza", "font-size-adjust"),
	("g", "gap"),
	("gd", "grid"),
	("gtc", "grid-template-columns:repeat(${0})|minmax()"),
	("gtr", "grid-template-rows:repeat(${0})|minmax()"),
	("gta", "grid-template-areas"),
	("gt", "grid-template"),
	("gg", "grid-gap"),
	("gcg", "grid-column-gap"),
	("grg", "grid-row-gap"),
	("gac", "grid-auto-columns:auto|minmax()"),
	("gar", "grid-auto-rows:auto|minmax()"),
	("gaf", "grid-auto-flow:row|column|dense|inherit|initial|unset"),
	("ga", "grid-area"),
	("gr", "grid-row"),
	("grs", "grid-row-start"),
	("gre", "grid-row-end"),
	("gc", "grid-column"),
	("gcs", "grid-column-start"),
	("gce", "grid-column-end"),
	("h", "height"),
	("jc", "justify-content:start|end|stretch|flex-start|flex-end|center|space-between|space-around|space-evenly"),
	("ji", "justify-items:start|end|center|stretch"),
	("js", "justify-self:start|end|center|stretch"),
	("l", "left"),
	("lg", "background-image:linear-gradient(${1})"),
	("lh", "line-height"),
	("lis", "list-style"),
	("lisi", "list-style-image"),
	("lisp", "list-style-position:inside|outside"),
	("list", "list-style-type:disc|circle|square|decimal|decimal-leading-zero|lower-roman|upper-roman"),
	("lts", "letter-spacing:normal"),
	("m", "margin"),
	("mah", "max-height"),
	("mar", "max-resolution"),
	("maw", "max-width"),
	("mb", "margin-bottom"),
	("mih", "min-height"),
	("mir", "min-resolution"),
	("miw", "min-width"),
	("ml", "margin-left"),
	("mr", "margin-right"),
	("mt", "margin-top"),
	("ol", "outline"),
	("olc", "outline-color:${1:#000}|invert"),
	("olo", "outline-offset"),
	("ols", "outline-style:none|dotted|dashed|solid|double|groove|ridge|inset|outset"),
	("olw", "outline-width:thin|medium|thick"),
	("op", "opacity"),
	("ord", "order"),
	("orp", "orphans"),
	("ov", "overflow:hidden|visible|scroll|auto"),
	("ovs", "overflow-style:scrollbar|auto|scrollbar|panner|move|marquee"),
	("ovx", "overflow-x:hidden|visible|scroll|auto"),
	("ovy", "overflow-y:hidden|visible|scroll|auto"),
	("p", "padding"),
	("pb", "padding-bottom"),
	("pgba", "page-break-after:auto|always|left|right"),
	("pgbb", "page-break-before:auto|always|left|right"),
	("pgbi", "page-break-inside:auto|avoid"),
	("pl", "padding-left"),
	("pos", "position:relative|absolute|fixed|static|sticky"),
	("pr", "padding-right"),
	("pt", "padding-top"),
	("q", "quotes"),
	("qen", "quotes:'\\201C' '\\201D' '\\2018' '\\2019'"),
	("qru", "quotes:'\\00AB' '\\00BB' '\\201E' '\\201C'"),
	("r", "right"),
	("rsz", "resize:none|both|horizontal|vertical"),
	("t", "top"),
	("ta", "text-align:left|center|right|justify"),
	("tal", "text-align-last:left|center|right"),
	("tbl", "table-layout:fixed"),
	("td", "text-decoration:none|underline|overline|line-through"),
	("te", "text-emphasis:none|accent|dot|circle|disc|before|after"),
	("th", "text-height:auto|font-size|text-size|max-size"),
	("ti", "text-indent"),
	("tj", "text-justify:auto|inter-word|inter-ideograph|inter-cluster|distribute|kashida|tibetan"),
	("to", "text-outline:${1:0} ${2:0} ${3:#000}"),
	("tov", "text-overflow:ellipsis|clip"),
	("tr", "text-replace"),
	("trf", "transform:${1}|skewX(${1:angle})|skewY(${1:angle})|scale(${1:x}, ${2:y})|scaleX(${1:x})|scaleY(${1:y})|scaleZ(${1:z})|scale3d(${1:x}, ${2:y}, ${3:z})|rotate(${1:angle})|rotateX(${1:angle})|rotateY(${1:angle})|rotateZ(${1:angle})|translate(${1:x}, ${2:y})|translateX(${1:x})|translateY(${1:y})|translateZ(${1:z})|translate3d(${1:tx}, ${2:ty}, ${3:tz})"),
	("trfo", "transform-origin"),
	("trfs", "transform-style:preserve-3d"),
	("trs", "transition:${1:prop} ${2:time}"),
	("trsde", "transition-delay:${1:time}"),
	("trsdu", "transition-duration:${1:time}"),
	("trsp", "transition-property:${1:prop}"),
	("trstf", "transition-timing-function:${1:fn}"),
	("tsh", "text-shadow:${1:hoff} ${2:voff} ${3:blur} ${4:#000}"),
	("tt", "text-transform:uppercase|lowercase|capitalize|none"),
	("tw", "text-wrap:none|normal|unrestricted|suppress"),
	("us", "user-select:none"),
	("v", "visibility:hidden|visible|collapse"),
	("va", "vertical-align:top|super|text-top|middle|baseline|bottom|text-bottom|sub"),
	("w", "width"),
	("whs", "white-space:nowrap|pre|pre-wrap|pre-line|normal"),
	("whsc", "white-space-collapse:normal|keep-all|loose|break-strict|break-all"),
	("wid", "widows"),
	("wm", "writing-mode:lr-tb|lr-tb|lr-bt|rl-tb|tb-rl|tb-lr|bt-lr|bt-rl"),
	("wob", "word-break:normal|keep-all|break-all"),
	("wos", "word-spacing"),
	("wow", "word-wrap:none|unrestricted|suppress|break-word|normal"),
	("z", "z-index"),
	("zom", "zoom:1"),
];
