//! Russian lorem-ipsum vocabulary.

pub(crate) const COMMON: &[&str] = &[
	"далеко-далеко",
	"за",
	"словесными",
	"горами",
	"в стране",
	"гласных",
	"и согласных",
	"живут",
	"рыбные",
	"тексты",
];

pub(crate) const WORDS: &[&str] = &[
	"вдали",
	"от",
	"всех",
	"живут",
	"они",
	"в",
	"буквенных",
	"домах",
	"на",
	"берегу",
	"семантика",
	"большого",
	"языкового",
	"океана",
	"маленький",
	"ручеек",
	"даль",
	"журчит",
	"по",
	"всей",
	"обеспечивает",
	"ее",
	"всеми",
	"необходимыми",
	"правилами",
	"эта",
	"парадигматическая",
	"страна",
	"которой",
	"жаренные",
	"предложения",
	"залетают",
	"прямо",
	"рот",
	"даже",
	"всемогущая",
	"пунктуация",
	"не",
	"имеет",
	"власти",
	"над",
	"рыбными",
	"текстами",
	"ведущими",
	"безорфографичный",
	"образ",
	"жизни",
	"однажды",
	"одна",
	"маленькая",
	"строчка",
	"рыбного",
	"текста",
	"имени",
	"lorem",
	"ipsum",
	"решила",
	"выйти",
	"большой",
	"мир",
	"грамматики",
	"великий",
	"оксмокс",
	"предупреждал",
	"о",
	"злых",
	"запятых",
	"диких",
	"знаках",
	"вопроса",
	"и",
	"коварных",
	"точках",
	"с",
	"запятой",
	"но",
	"текст",
	"дал",
	"сбить",
	"себя",
	"толку",
	"он",
	"собрал",
	"семь",
	"своих",
	"заглавных",
	"букв",
	"подпоясал",
	"инициал",
	"за",
	"пояс",
	"пустился",
	"дорогу",
];
