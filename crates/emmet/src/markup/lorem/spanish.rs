//! Spanish lorem-ipsum vocabulary.

pub(crate) const COMMON: &[&str] = &[
	"mujer",
	"uno",
	"dolor",
	"más",
	"de",
	"poder",
	"mismo",
	"si",
];

pub(crate) const WORDS: &[&str] = &[
	"ejercicio",
	"preferencia",
	"perspicacia",
	"laboral",
	"paño",
	"suntuoso",
	"molde",
	"namibia",
	"planeador",
	"mirar",
	"demás",
	"oficinista",
	"excepción",
	"odio",
	"consecuencia",
	"casi",
	"auto",
	"chicharra",
	"velo",
	"elegibilidad",
	"entonces",
	"norteamérica",
	"olvidado",
	"temporalidad",
	"querida",
	"dignísimo",
	"facilismo",
	"letra",
	"nihilista",
	"expedición",
	"vital",
	"verdadero",
	"embarcación",
	"anillo",
	"cúmulo",
	"pari",
	"velocísimo",
	"modernidad",
	"natividad",
	"justo",
	"ataque",
	"sequía",
	"ilustre",
	"sed",
	"excelencia",
	"voluptuoso",
	"temporada",
	"verdad",
	"racional",
	"asunción",
	"incidente",
	"nuestras",
	"placidez",
	"alguna",
	"fugaz",
	"providencia",
	"presente",
	"rama",
	"necesidad",
	"suscitar",
	"adiposidad",
	"quietud",
	"posibilidad",
	"voluptuosidad",
	"débito",
	"sincero",
	"acusación",
	"unísono",
	"sapiencia",
	"voluptuosa",
	"aspecto",
	"laudatorio",
	"soluble",
];
