//! Term dictionaries for free-text address classification.
//!
//! Entries are upper case. Street suffixes and unit designators follow USPS Publication 28
//! (appendices C1 and C2), with common Spanish forms.

use phf::{phf_set, Set};

/// Country names and codes for North and Central America.
pub(crate) static COUNTRIES: Set<&'static str> = phf_set! {
    "US", "U.S.", "U.S.A.", "USA", "UNITED STATES", "UNITED STATES OF AMERICA", "CN",
    "CANADA", "MX", "MEXICO", "BZ", "BELIZE", "CR", "COSTA RICA", "CZ", "CANAL ZONE", "SV",
    "EL SALVADOR", "GT", "GUATEMALA", "HN", "HONDURAS", "NI", "NICARAGUA", "PA", "PANAMA",
};

/// US states and territories, Canadian provinces and Mexican states.
pub(crate) static STATES: Set<&'static str> = phf_set! {
    "AL", "ALABAMA", "AK", "ALASKA", "AZ", "ARIZONA", "AR", "ARKANSAS", "AS",
    "AMERICAN SAMOA", "CA", "CALIFORNIA", "CO", "COLORADO", "CT", "CONNECTICUT", "DE",
    "DELAWARE", "DC", "DISTRICT OF COLUMBIA", "FL", "FLORIDA", "GA", "GEORGIA", "GU",
    "GUAM", "HI", "HAWAII", "ID", "IDAHO", "IL", "ILLINOIS", "IN", "INDIANA", "IA", "IOWA",
    "KS", "KANSAS", "KY", "KENTUCKY", "LA", "LOUISIANA", "ME", "MAINE", "MD", "MARYLAND",
    "MA", "MASSACHUSETTS", "MI", "MICHIGAN", "MN", "MINNESOTA", "MS", "MISSISSIPPI", "MO",
    "MISSOURI", "MT", "MONTANA", "NE", "NEBRASKA", "NV", "NEVADA", "NH", "NEW HAMPSHIRE",
    "NJ", "NEW JERSEY", "NM", "NEW MEXICO", "NY", "NEW YORK", "NC", "NORTH CAROLINA", "ND",
    "NORTH DAKOTA", "MP", "NORTHERN MARIANA ISLANDS", "OH", "OHIO", "OK", "OKLAHOMA", "OR",
    "OREGON", "PA", "PENNSYLVANIA", "PR", "PUERTO RICO", "RI", "RHODE ISLAND", "SC",
    "SOUTH CAROLINA", "SD", "SOUTH DAKOTA", "TN", "TENNESSEE", "TX", "TEXAS", "TT",
    "TRUST TERRITORIES", "UT", "UTAH", "VT", "VERMONT", "VA", "VIRGINIA", "VI",
    "VIRGIN ISLANDS", "WA", "WASHINGTON", "WV", "WEST VIRGINIA", "WI", "WISCONSIN", "WY",
    "WYOMING", "NEWFOUNDLAND AND LABRADOR", "NEWFOUNDLAND", "LABRADOR", "NL",
    "PRINCE EDWARD ISLAND", "PE", "NOVA SCOTIA", "NS", "NEW BRUNSWICK", "NB", "QUEBEC",
    "QC", "ONTARIO", "ON", "MANITOBA", "MB", "SASKATCHEWAN", "SK", "ALBERTA", "AB",
    "BRITISH COLUMBIA", "BC", "YUKON", "YT", "NORTHWEST TERRITORIES", "NT", "NUNAVUT", "NU",
    "AG", "AGUASCALIENTES", "BN", "BAJA CALIFORNIA NORTE", "BS", "BAJA CALIFORNIA SUR",
    "CH", "COAHUILA", "CI", "CHIHUAHUA", "CL", "COLIMA", "CP", "CAMPECHE", "CS", "CHIAPAS",
    "DF", "DISTRICTO FEDERAL", "DG", "DURANGO", "GE", "GUERRERO", "GJ", "GUANAJUATO", "HD",
    "HIDALGO", "JA", "JALISCO", "MC", "MICHOACAN", "MR", "MORELOS", "MX", "MEXICO", "NA",
    "NAYARIT", "NUEVO LEON", "OA", "OAXACA", "PU", "PUEBLA", "QE", "QUERETARO", "QI",
    "QUINTANA ROO", "SI", "SINALOA", "SL", "SAN LUIS POTOSI", "SO", "SONORA", "TA",
    "TAMAULIPAS", "TB", "TABASCO", "TL", "TLAXCALA", "VC", "VERACRUZ", "YU", "YUCATAN",
    "ZA", "ZACATECA",
};

/// Street suffixes.
pub(crate) static STREET_SUFFIXES: Set<&'static str> = phf_set! {
    "ALLEE", "ALLEY", "ALLY", "ALY", "ANEX", "ANNEX", "ANNX", "ANX", "ARC", "ARCADE", "AV",
    "AVE", "AVEN", "AVENU", "AVENUE", "AVN", "AVNUE", "BAYOO", "BAYOU", "BCH", "BEACH",
    "BEND", "BG", "BGS", "BLF", "BLFS", "BLUF", "BLUFF", "BLUFFS", "BLVD", "BND", "BOT",
    "BOTTM", "BOTTOM", "BOUL", "BOULEVARD", "BOULV", "BR", "BRANCH", "BRDGE", "BRG",
    "BRIDGE", "BRK", "BRKS", "BRNCH", "BROOK", "BROOKS", "BTM", "BURG", "BURGS", "BYP",
    "BYPA", "BYPAS", "BYPASS", "BYPS", "BYU", "CAMP", "CANYN", "CANYON", "CAPE", "CAUSEWAY",
    "CAUSWA", "CEN", "CENT", "CENTER", "CENTERS", "CENTR", "CENTRE", "CIR", "CIRC", "CIRCL",
    "CIRCLE", "CIRCLES", "CIRS", "CLB", "CLF", "CLFS", "CLIFF", "CLIFFS", "CLUB", "CMN",
    "CMNS", "CMP", "CNTER", "CNTR", "CNYN", "COMMON", "COMMONS", "COR", "CORNER", "CORNERS",
    "CORS", "COURSE", "COURT", "COURTS", "COVE", "COVES", "CP", "CPE", "CRCL", "CRCLE",
    "CREEK", "CRES", "CRESCENT", "CREST", "CRK", "CROSSING", "CROSSROAD", "CROSSROADS",
    "CRSE", "CRSENT", "CRSNT", "CRSSNG", "CRST", "CSWY", "CT", "CTR", "CTRS", "CTS", "CURV",
    "CURVE", "CV", "CVS", "CYN", "DALE", "DAM", "DIV", "DIVIDE", "DL", "DM", "DR", "DRIV",
    "DRIVE", "DRIVES", "DRS", "DRV", "DV", "DVD", "EST", "ESTATE", "ESTATES", "ESTS", "EXP",
    "EXPR", "EXPRESS", "EXPRESSWAY", "EXPW", "EXPY", "EXT", "EXTENSION", "EXTENSIONS",
    "EXTN", "EXTNSN", "EXTS", "FALL", "FALLS", "FERRY", "FIELD", "FIELDS", "FLAT", "FLATS",
    "FLD", "FLDS", "FLS", "FLT", "FLTS", "FORD", "FORDS", "FOREST", "FORESTS", "FORG",
    "FORGE", "FORGES", "FORK", "FORKS", "FORT", "FRD", "FRDS", "FREEWAY", "FREEWY", "FRG",
    "FRGS", "FRK", "FRKS", "FRRY", "FRST", "FRT", "FRWAY", "FRWY", "FRY", "FT", "FWY",
    "GARDEN", "GARDENS", "GARDN", "GATEWAY", "GATEWY", "GATWAY", "GDN", "GDNS", "GLEN",
    "GLENS", "GLN", "GLNS", "GRDEN", "GRDN", "GRDNS", "GREEN", "GREENS", "GRN", "GRNS",
    "GROV", "GROVE", "GROVES", "GRV", "GRVS", "GTWAY", "GTWY", "HARB", "HARBOR", "HARBORS",
    "HARBR", "HAVEN", "HBR", "HBRS", "HEIGHTS", "HIGHWAY", "HIGHWY", "HILL", "HILLS",
    "HIWAY", "HIWY", "HL", "HLLW", "HLS", "HOLLOW", "HOLLOWS", "HOLW", "HOLWS", "HRBOR",
    "HT", "HTS", "HVN", "HWAY", "HWY", "INLET", "INLT", "IS", "ISLAND", "ISLANDS", "ISLE",
    "ISLES", "ISLND", "ISLNDS", "ISS", "JCT", "JCTION", "JCTN", "JCTNS", "JCTS", "JUNCTION",
    "JUNCTIONS", "JUNCTN", "JUNCTON", "KEY", "KEYS", "KNL", "KNLS", "KNOL", "KNOLL",
    "KNOLLS", "KY", "KYS", "LAKE", "LAKES", "LAND", "LANDING", "LANE", "LCK", "LCKS", "LDG",
    "LDGE", "LF", "LGT", "LGTS", "LIGHT", "LIGHTS", "LK", "LKS", "LN", "LNDG", "LNDNG",
    "LOAF", "LOCK", "LOCKS", "LODG", "LODGE", "LOOP", "LOOPS", "MALL", "MANOR", "MANORS",
    "MDW", "MDWS", "MEADOW", "MEADOWS", "MEDOWS", "MEWS", "MILL", "MILLS", "MISSION",
    "MISSN", "ML", "MLS", "MNR", "MNRS", "MNT", "MNTAIN", "MNTN", "MNTNS", "MOTORWAY",
    "MOUNT", "MOUNTAIN", "MOUNTAINS", "MOUNTIN", "MSN", "MSSN", "MT", "MTIN", "MTN", "MTNS",
    "MTWY", "NCK", "NECK", "OPAS", "ORCH", "ORCHARD", "ORCHRD", "OVAL", "OVERPASS", "OVL",
    "PARK", "PARKS", "PARKWAY", "PARKWAYS", "PARKWY", "PASS", "PASSAGE", "PATH", "PATHS",
    "PIKE", "PIKES", "PINE", "PINES", "PKWAY", "PKWY", "PKWYS", "PKY", "PL", "PLACE",
    "PLAIN", "PLAINS", "PLAZA", "PLN", "PLNS", "PLZ", "PLZA", "PNE", "PNES", "POINT",
    "POINTS", "PORT", "PORTS", "PR", "PRAIRIE", "PRK", "PRR", "PRT", "PRTS", "PSGE", "PT",
    "PTS", "RAD", "RADIAL", "RADIEL", "RADL", "RAMP", "RANCH", "RANCHES", "RAPID", "RAPIDS",
    "RD", "RDG", "RDGE", "RDGS", "RDS", "REST", "RIDGE", "RIDGES", "RIV", "RIVER", "RIVR",
    "RNCH", "RNCHS", "ROAD", "ROADS", "ROUTE", "ROW", "RPD", "RPDS", "RST", "RTE", "RUE",
    "RUN", "RVR", "SHL", "SHLS", "SHOAL", "SHOALS", "SHOAR", "SHOARS", "SHORE", "SHORES",
    "SHR", "SHRS", "SKWY", "SKYWAY", "SMT", "SPG", "SPGS", "SPNG", "SPNGS", "SPRING",
    "SPRINGS", "SPRNG", "SPRNGS", "SPUR", "SPURS", "SQ", "SQR", "SQRE", "SQRS", "SQS",
    "SQU", "SQUARE", "SQUARES", "ST", "STA", "STATION", "STATN", "STN", "STR", "STRA",
    "STRAV", "STRAVEN", "STRAVENUE", "STRAVN", "STREAM", "STREET", "STREETS", "STREME",
    "STRM", "STRT", "STRVN", "STRVNUE", "STS", "SUMIT", "SUMITT", "SUMMIT", "TER", "TERR",
    "TERRACE", "THROUGHWAY", "TPKE", "TRACE", "TRACES", "TRACK", "TRACKS", "TRAFFICWAY",
    "TRAIL", "TRAILER", "TRAILS", "TRAK", "TRCE", "TRFY", "TRK", "TRKS", "TRL", "TRLR",
    "TRLRS", "TRLS", "TRNPK", "TRWY", "TUNEL", "TUNL", "TUNLS", "TUNNEL", "TUNNELS",
    "TUNNL", "TURNPIKE", "TURNPK", "UN", "UNDERPASS", "UNION", "UNIONS", "UNS", "UPAS",
    "VALLEY", "VALLEYS", "VALLY", "VDCT", "VIA", "VIADCT", "VIADUCT", "VIEW", "VIEWS",
    "VILL", "VILLAG", "VILLAGE", "VILLAGES", "VILLE", "VILLG", "VILLIAGE", "VIS", "VIST",
    "VISTA", "VL", "VLG", "VLGS", "VLLY", "VLY", "VLYS", "VST", "VSTA", "VW", "VWS", "WALK",
    "WALKS", "WALL", "WAY", "WAYS", "WELL", "WELLS", "WL", "WLS", "WY", "XING", "XRD",
    "XRDS", "AVENIDA", "CALLE", "CLL", "CAMINITO", "CMT", "CAMINO", "CAM", "CERRADA", "CER",
    "CIRCULO", "ENTRADA", "ENT", "PASEO", "PSO", "PLACITA", "PLA", "RANCHO", "RCH",
    "VEREDA", "VER",
};

/// Secondary unit designators.
pub(crate) static UNIT_DESIGNATORS: Set<&'static str> = phf_set! {
    "APARTMENT", "APT", "BASEMENT", "BLDG", "BOX", "BSMT", "BUILDING", "DEPARTMENT", "DEPT",
    "FL", "FLOOR", "FRNT", "FRONT", "HANGER", "HNGR", "KEY", "LBBY", "LOBBY", "LOT",
    "LOWER", "LOWR", "OFC", "OFFICE", "PENTHOUSE", "PH", "PIER", "REAR", "RM", "ROOM",
    "SIDE", "SLIP", "SPACE", "SPC", "STE", "STOP", "SUITE", "TRAILER", "TRLR", "UNIT",
    "UPPER", "UPPR", "ALTURA", "ALT", "ALTURAS", "ALTS", "BARRIADA", "BDA", "BARRIO", "BO",
    "CARRETERA", "CARR", "CONDOMINIO", "COND", "COOPERATIVA", "COO", "DEPARTAMENTO",
    "EDIFICIO", "EDIF", "ESTANCIAS", "EST", "EXTENSIÓN", "EXT", "INDUSTRIAL INTERIOR",
    "IND INT", "JARDINES", "JARD", "MANSIONES", "MANS", "PARCELAS", "PARC", "QUEBRADA",
    "QBDA", "REPARTO", "REPTO", "RESIDENCIAL", "RES", "SECTOR", "SECT", "SECCIÓN", "SECC",
    "TERRAZA", "TERR", "URBANIZACIÓN", "URB",
};

/// Directionals.
pub(crate) static DIRECTIONALS: Set<&'static str> = phf_set! {
    "N", "NORTE", "NORTH", "NE", "NORESTE", "NORTHEAST", "NW", "NOROESTE", "NORTHWEST", "S",
    "SUR", "SOUTH", "SE", "SURESTE", "SOUTHEAST", "SW", "SUROESTE", "SOUTHWEST", "E",
    "ESTE", "EAST", "W", "OESTE", "WEST",
};
