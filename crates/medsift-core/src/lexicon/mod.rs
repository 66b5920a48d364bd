//! Static veterinary drug lexicon.
//!
//! The lexicon is the highest-confidence matching source: a curated
//! category → drug-name table covering the generic and brand names a small
//! animal practice actually writes in its notes. Lookup in the matching
//! direction (name → category) goes through a reverse index built once at
//! first use; the tables are immutable afterwards, so concurrent extraction
//! calls share them freely.

mod exclusions;

pub use exclusions::{has_drug_suffix, is_excluded, DRUG_SUFFIXES};

use std::collections::HashMap;
use std::sync::LazyLock;

/// Category → known drug names, all lowercase, hyphens for combinations.
///
/// Iteration order is the lexicon order: if a name ever appeared under two
/// categories, the first category listed here wins.
pub static DRUG_LEXICON: &[(&str, &[&str])] = &[
    (
        "antibiotics",
        &[
            "amoxicillin",
            "amoxicillin-clavulanate",
            "clavamox",
            "ampicillin",
            "penicillin",
            "cephalexin",
            "cefpodoxime",
            "simplicef",
            "cefovecin",
            "convenia",
            "cefazolin",
            "enrofloxacin",
            "baytril",
            "marbofloxacin",
            "zeniquin",
            "orbifloxacin",
            "orbax",
            "pradofloxacin",
            "ciprofloxacin",
            "doxycycline",
            "minocycline",
            "tetracycline",
            "oxytetracycline",
            "clindamycin",
            "antirobe",
            "azithromycin",
            "erythromycin",
            "tylosin",
            "metronidazole",
            "trimethoprim-sulfamethoxazole",
            "sulfadimethoxine",
            "albon",
            "chloramphenicol",
            "florfenicol",
            "gentamicin",
            "amikacin",
            "rifampin",
            "nitrofurantoin",
        ],
    ),
    (
        "nsaids",
        &[
            "carprofen",
            "rimadyl",
            "novox",
            "quellin",
            "meloxicam",
            "metacam",
            "loxicom",
            "deracoxib",
            "deramaxx",
            "firocoxib",
            "previcox",
            "robenacoxib",
            "onsior",
            "grapiprant",
            "galliprant",
            "ketoprofen",
            "etodolac",
            "piroxicam",
            "aspirin",
            "phenylbutazone",
            "flunixin",
            "banamine",
        ],
    ),
    (
        "analgesics",
        &[
            "tramadol",
            "gabapentin",
            "pregabalin",
            "buprenorphine",
            "buprenex",
            "simbadol",
            "butorphanol",
            "torbugesic",
            "torbutrol",
            "fentanyl",
            "morphine",
            "hydromorphone",
            "oxymorphone",
            "methadone",
            "codeine",
            "amantadine",
        ],
    ),
    (
        "sedatives",
        &[
            "acepromazine",
            "promace",
            "dexmedetomidine",
            "dexdomitor",
            "sileo",
            "medetomidine",
            "domitor",
            "xylazine",
            "detomidine",
            "atipamezole",
            "antisedan",
            "yohimbine",
        ],
    ),
    (
        "anesthetics",
        &[
            "propofol",
            "propoflo",
            "ketamine",
            "tiletamine-zolazepam",
            "telazol",
            "alfaxalone",
            "alfaxan",
            "etomidate",
            "isoflurane",
            "sevoflurane",
            "lidocaine",
            "bupivacaine",
            "mepivacaine",
        ],
    ),
    (
        "anticonvulsants",
        &[
            "phenobarbital",
            "levetiracetam",
            "keppra",
            "zonisamide",
            "zonegran",
            "potassium-bromide",
            "diazepam",
            "valium",
            "midazolam",
            "lorazepam",
            "clonazepam",
            "clorazepate",
            "felbamate",
        ],
    ),
    (
        "steroids",
        &[
            "prednisone",
            "prednisolone",
            "dexamethasone",
            "azium",
            "methylprednisolone",
            "depo-medrol",
            "triamcinolone",
            "vetalog",
            "budesonide",
            "hydrocortisone",
            "fludrocortisone",
            "florinef",
        ],
    ),
    (
        "gastrointestinal",
        &[
            "maropitant",
            "cerenia",
            "ondansetron",
            "zofran",
            "metoclopramide",
            "reglan",
            "famotidine",
            "pepcid",
            "ranitidine",
            "zantac",
            "omeprazole",
            "prilosec",
            "gastrogard",
            "pantoprazole",
            "esomeprazole",
            "sucralfate",
            "carafate",
            "cisapride",
            "misoprostol",
            "cytotec",
            "loperamide",
            "imodium",
            "capromorelin",
            "entyce",
            "mirtazapine",
            "mirataz",
            "lactulose",
            "ursodiol",
            "actigall",
        ],
    ),
    (
        "cardiac",
        &[
            "pimobendan",
            "vetmedin",
            "enalapril",
            "enacard",
            "benazepril",
            "fortekor",
            "lisinopril",
            "furosemide",
            "lasix",
            "salix",
            "torsemide",
            "spironolactone",
            "diltiazem",
            "amlodipine",
            "norvasc",
            "atenolol",
            "propranolol",
            "sotalol",
            "mexiletine",
            "digoxin",
            "clopidogrel",
            "plavix",
            "sildenafil",
        ],
    ),
    (
        "antiparasitics",
        &[
            "ivermectin",
            "heartgard",
            "ivomec",
            "milbemycin",
            "interceptor",
            "milbemycin-lufenuron",
            "sentinel",
            "selamectin",
            "revolution",
            "moxidectin",
            "proheart",
            "fenbendazole",
            "panacur",
            "pyrantel",
            "strongid",
            "praziquantel",
            "droncit",
            "praziquantel-pyrantel",
            "drontal",
            "fluralaner",
            "bravecto",
            "afoxolaner",
            "nexgard",
            "sarolaner",
            "simparica",
            "lotilaner",
            "credelio",
            "fipronil",
            "frontline",
            "imidacloprid",
            "lufenuron",
            "nitenpyram",
            "capstar",
            "emodepside",
            "ponazuril",
        ],
    ),
    (
        "antifungals",
        &[
            "itraconazole",
            "itrafungol",
            "fluconazole",
            "ketoconazole",
            "terbinafine",
            "lamisil",
            "griseofulvin",
            "miconazole",
            "clotrimazole",
            "enilconazole",
            "amphotericin",
        ],
    ),
    (
        "antihistamines",
        &[
            "diphenhydramine",
            "benadryl",
            "cetirizine",
            "zyrtec",
            "loratadine",
            "claritin",
            "chlorpheniramine",
            "hydroxyzine",
            "fexofenadine",
            "cyproheptadine",
        ],
    ),
    (
        "behavioral",
        &[
            "fluoxetine",
            "reconcile",
            "prozac",
            "sertraline",
            "zoloft",
            "paroxetine",
            "clomipramine",
            "clomicalm",
            "amitriptyline",
            "trazodone",
            "alprazolam",
            "xanax",
            "buspirone",
            "selegiline",
            "anipryl",
        ],
    ),
    (
        "endocrine",
        &[
            "levothyroxine",
            "soloxine",
            "thyro-tabs",
            "methimazole",
            "tapazole",
            "felimazole",
            "insulin",
            "vetsulin",
            "glargine",
            "lantus",
            "detemir",
            "levemir",
            "trilostane",
            "vetoryl",
            "mitotane",
            "lysodren",
            "desmopressin",
            "glipizide",
        ],
    ),
    (
        "dermatology",
        &[
            "oclacitinib",
            "apoquel",
            "lokivetmab",
            "cytopoint",
            "cyclosporine",
            "atopica",
            "tacrolimus",
            "mupirocin",
            "silver-sulfadiazine",
        ],
    ),
    (
        "ophthalmic",
        &[
            "dorzolamide",
            "timolol",
            "latanoprost",
            "tropicamide",
            "atropine",
            "flurbiprofen",
            "diclofenac",
            "tobramycin",
            "ofloxacin",
        ],
    ),
    (
        "respiratory",
        &[
            "theophylline",
            "aminophylline",
            "terbutaline",
            "albuterol",
            "fluticasone",
            "hydrocodone",
            "dextromethorphan",
            "doxapram",
        ],
    ),
    (
        "chemotherapy",
        &[
            "chlorambucil",
            "leukeran",
            "cyclophosphamide",
            "cytoxan",
            "vincristine",
            "doxorubicin",
            "lomustine",
            "toceranib",
            "palladia",
        ],
    ),
    (
        "immunosuppressants",
        &[
            "azathioprine",
            "mycophenolate",
            "leflunomide",
            "masitinib",
        ],
    ),
    (
        "urinary",
        &[
            "phenylpropanolamine",
            "proin",
            "prazosin",
            "phenoxybenzamine",
            "bethanechol",
            "oxybutynin",
            "allopurinol",
            "methocarbamol",
        ],
    ),
    (
        "supplements",
        &[
            "denamarin",
            "silymarin",
            "glucosamine",
            "chondroitin",
            "taurine",
            "carnitine",
            "apomorphine",
        ],
    ),
];

/// Reverse index: lowercase drug name → category. Built once; first
/// category in lexicon order wins for any repeated name.
static NAME_TO_CATEGORY: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for (category, names) in DRUG_LEXICON {
        for name in *names {
            index.entry(*name).or_insert(*category);
        }
    }
    index
});

/// Look up the therapeutic category for a drug name (case-insensitive).
pub fn category_of(name: &str) -> Option<&'static str> {
    NAME_TO_CATEGORY.get(name.to_lowercase().as_str()).copied()
}

/// Whether the name is a known lexicon drug (case-insensitive).
pub fn is_known_drug(name: &str) -> bool {
    NAME_TO_CATEGORY.contains_key(name.to_lowercase().as_str())
}

/// All (name, category) pairs in lexicon order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    DRUG_LEXICON
        .iter()
        .flat_map(|(category, names)| names.iter().map(move |name| (*name, *category)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup() {
        assert_eq!(category_of("amoxicillin"), Some("antibiotics"));
        assert_eq!(category_of("cerenia"), Some("gastrointestinal"));
        assert_eq!(category_of("famotidine"), Some("gastrointestinal"));
        assert_eq!(category_of("carprofen"), Some("nsaids"));
        assert_eq!(category_of("notadrug"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(category_of("Amoxicillin"), Some("antibiotics"));
        assert_eq!(category_of("CERENIA"), Some("gastrointestinal"));
        assert!(is_known_drug("Rimadyl"));
    }

    #[test]
    fn test_entries_follow_lexicon_order() {
        let first = entries().next().unwrap();
        assert_eq!(first, ("amoxicillin", "antibiotics"));
    }

    #[test]
    fn test_lexicon_is_lowercase() {
        for (name, _) in entries() {
            assert_eq!(
                name,
                name.to_lowercase(),
                "lexicon entry {name} must be lowercase"
            );
        }
    }

    #[test]
    fn test_no_excluded_words_in_lexicon() {
        for (name, _) in entries() {
            assert!(
                !is_excluded(name),
                "lexicon entry {name} collides with the exclusion set"
            );
        }
    }

    #[test]
    fn test_reverse_index_covers_all_entries() {
        for (name, _) in entries() {
            assert!(is_known_drug(name), "missing reverse index entry: {name}");
        }
    }
}
