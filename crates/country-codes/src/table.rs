//! ISO 3166-1 entries ordered by English short name

use crate::Country;

pub static COUNTRIES: &[Country] = &[
    Country { alpha_2: "AF", alpha_3: "AFG", name: "Afghanistan" },
    Country { alpha_2: "AX", alpha_3: "ALA", name: "Åland Islands" },
    Country { alpha_2: "AL", alpha_3: "ALB", name: "Albania" },
    Country { alpha_2: "DZ", alpha_3: "DZA", name: "Algeria" },
    Country { alpha_2: "AS", alpha_3: "ASM", name: "American Samoa" },
    Country { alpha_2: "AD", alpha_3: "AND", name: "Andorra" },
    Country { alpha_2: "AO", alpha_3: "AGO", name: "Angola" },
    Country { alpha_2: "AI", alpha_3: "AIA", name: "Anguilla" },
    Country { alpha_2: "AQ", alpha_3: "ATA", name: "Antarctica" },
    Country { alpha_2: "AG", alpha_3: "ATG", name: "Antigua and Barbuda" },
    Country { alpha_2: "AR", alpha_3: "ARG", name: "Argentina" },
    Country { alpha_2: "AM", alpha_3: "ARM", name: "Armenia" },
    Country { alpha_2: "AW", alpha_3: "ABW", name: "Aruba" },
    Country { alpha_2: "AU", alpha_3: "AUS", name: "Australia" },
    Country { alpha_2: "AT", alpha_3: "AUT", name: "Austria" },
    Country { alpha_2: "AZ", alpha_3: "AZE", name: "Azerbaijan" },
    Country { alpha_2: "BS", alpha_3: "BHS", name: "Bahamas" },
    Country { alpha_2: "BH", alpha_3: "BHR", name: "Bahrain" },
    Country { alpha_2: "BD", alpha_3: "BGD", name: "Bangladesh" },
    Country { alpha_2: "BB", alpha_3: "BRB", name: "Barbados" },
    Country { alpha_2: "BY", alpha_3: "BLR", name: "Belarus" },
    Country { alpha_2: "BE", alpha_3: "BEL", name: "Belgium" },
    Country { alpha_2: "BZ", alpha_3: "BLZ", name: "Belize" },
    Country { alpha_2: "BJ", alpha_3: "BEN", name: "Benin" },
    Country { alpha_2: "BM", alpha_3: "BMU", name: "Bermuda" },
    Country { alpha_2: "BT", alpha_3: "BTN", name: "Bhutan" },
    Country { alpha_2: "BO", alpha_3: "BOL", name: "Bolivia, Plurinational State of" },
    Country { alpha_2: "BQ", alpha_3: "BES", name: "Bonaire, Sint Eustatius and Saba" },
    Country { alpha_2: "BA", alpha_3: "BIH", name: "Bosnia and Herzegovina" },
    Country { alpha_2: "BW", alpha_3: "BWA", name: "Botswana" },
    Country { alpha_2: "BV", alpha_3: "BVT", name: "Bouvet Island" },
    Country { alpha_2: "BR", alpha_3: "BRA", name: "Brazil" },
    Country { alpha_2: "IO", alpha_3: "IOT", name: "British Indian Ocean Territory" },
    Country { alpha_2: "BN", alpha_3: "BRN", name: "Brunei Darussalam" },
    Country { alpha_2: "BG", alpha_3: "BGR", name: "Bulgaria" },
    Country { alpha_2: "BF", alpha_3: "BFA", name: "Burkina Faso" },
    Country { alpha_2: "BI", alpha_3: "BDI", name: "Burundi" },
    Country { alpha_2: "CV", alpha_3: "CPV", name: "Cabo Verde" },
    Country { alpha_2: "KH", alpha_3: "KHM", name: "Cambodia" },
    Country { alpha_2: "CM", alpha_3: "CMR", name: "Cameroon" },
    Country { alpha_2: "CA", alpha_3: "CAN", name: "Canada" },
    Country { alpha_2: "KY", alpha_3: "CYM", name: "Cayman Islands" },
    Country { alpha_2: "CF", alpha_3: "CAF", name: "Central African Republic" },
    Country { alpha_2: "TD", alpha_3: "TCD", name: "Chad" },
    Country { alpha_2: "CL", alpha_3: "CHL", name: "Chile" },
    Country { alpha_2: "CN", alpha_3: "CHN", name: "China" },
    Country { alpha_2: "CX", alpha_3: "CXR", name: "Christmas Island" },
    Country { alpha_2: "CC", alpha_3: "CCK", name: "Cocos (Keeling) Islands" },
    Country { alpha_2: "CO", alpha_3: "COL", name: "Colombia" },
    Country { alpha_2: "KM", alpha_3: "COM", name: "Comoros" },
    Country { alpha_2: "CG", alpha_3: "COG", name: "Congo" },
    Country { alpha_2: "CD", alpha_3: "COD", name: "Congo, The Democratic Republic of the" },
    Country { alpha_2: "CK", alpha_3: "COK", name: "Cook Islands" },
    Country { alpha_2: "CR", alpha_3: "CRI", name: "Costa Rica" },
    Country { alpha_2: "CI", alpha_3: "CIV", name: "Côte d'Ivoire" },
    Country { alpha_2: "HR", alpha_3: "HRV", name: "Croatia" },
    Country { alpha_2: "CU", alpha_3: "CUB", name: "Cuba" },
    Country { alpha_2: "CW", alpha_3: "CUW", name: "Curaçao" },
    Country { alpha_2: "CY", alpha_3: "CYP", name: "Cyprus" },
    Country { alpha_2: "CZ", alpha_3: "CZE", name: "Czechia" },
    Country { alpha_2: "DK", alpha_3: "DNK", name: "Denmark" },
    Country { alpha_2: "DJ", alpha_3: "DJI", name: "Djibouti" },
    Country { alpha_2: "DM", alpha_3: "DMA", name: "Dominica" },
    Country { alpha_2: "DO", alpha_3: "DOM", name: "Dominican Republic" },
    Country { alpha_2: "EC", alpha_3: "ECU", name: "Ecuador" },
    Country { alpha_2: "EG", alpha_3: "EGY", name: "Egypt" },
    Country { alpha_2: "SV", alpha_3: "SLV", name: "El Salvador" },
    Country { alpha_2: "GQ", alpha_3: "GNQ", name: "Equatorial Guinea" },
    Country { alpha_2: "ER", alpha_3: "ERI", name: "Eritrea" },
    Country { alpha_2: "EE", alpha_3: "EST", name: "Estonia" },
    Country { alpha_2: "SZ", alpha_3: "SWZ", name: "Eswatini" },
    Country { alpha_2: "ET", alpha_3: "ETH", name: "Ethiopia" },
    Country { alpha_2: "FK", alpha_3: "FLK", name: "Falkland Islands (Malvinas)" },
    Country { alpha_2: "FO", alpha_3: "FRO", name: "Faroe Islands" },
    Country { alpha_2: "FJ", alpha_3: "FJI", name: "Fiji" },
    Country { alpha_2: "FI", alpha_3: "FIN", name: "Finland" },
    Country { alpha_2: "FR", alpha_3: "FRA", name: "France" },
    Country { alpha_2: "GF", alpha_3: "GUF", name: "French Guiana" },
    Country { alpha_2: "PF", alpha_3: "PYF", name: "French Polynesia" },
    Country { alpha_2: "TF", alpha_3: "ATF", name: "French Southern Territories" },
    Country { alpha_2: "GA", alpha_3: "GAB", name: "Gabon" },
    Country { alpha_2: "GM", alpha_3: "GMB", name: "Gambia" },
    Country { alpha_2: "GE", alpha_3: "GEO", name: "Georgia" },
    Country { alpha_2: "DE", alpha_3: "DEU", name: "Germany" },
    Country { alpha_2: "GH", alpha_3: "GHA", name: "Ghana" },
    Country { alpha_2: "GI", alpha_3: "GIB", name: "Gibraltar" },
    Country { alpha_2: "GR", alpha_3: "GRC", name: "Greece" },
    Country { alpha_2: "GL", alpha_3: "GRL", name: "Greenland" },
    Country { alpha_2: "GD", alpha_3: "GRD", name: "Grenada" },
    Country { alpha_2: "GP", alpha_3: "GLP", name: "Guadeloupe" },
    Country { alpha_2: "GU", alpha_3: "GUM", name: "Guam" },
    Country { alpha_2: "GT", alpha_3: "GTM", name: "Guatemala" },
    Country { alpha_2: "GG", alpha_3: "GGY", name: "Guernsey" },
    Country { alpha_2: "GN", alpha_3: "GIN", name: "Guinea" },
    Country { alpha_2: "GW", alpha_3: "GNB", name: "Guinea-Bissau" },
    Country { alpha_2: "GY", alpha_3: "GUY", name: "Guyana" },
    Country { alpha_2: "HT", alpha_3: "HTI", name: "Haiti" },
    Country { alpha_2: "HM", alpha_3: "HMD", name: "Heard Island and McDonald Islands" },
    Country { alpha_2: "VA", alpha_3: "VAT", name: "Holy See (Vatican City State)" },
    Country { alpha_2: "HN", alpha_3: "HND", name: "Honduras" },
    Country { alpha_2: "HK", alpha_3: "HKG", name: "Hong Kong" },
    Country { alpha_2: "HU", alpha_3: "HUN", name: "Hungary" },
    Country { alpha_2: "IS", alpha_3: "ISL", name: "Iceland" },
    Country { alpha_2: "IN", alpha_3: "IND", name: "India" },
    Country { alpha_2: "ID", alpha_3: "IDN", name: "Indonesia" },
    Country { alpha_2: "IR", alpha_3: "IRN", name: "Iran, Islamic Republic of" },
    Country { alpha_2: "IQ", alpha_3: "IRQ", name: "Iraq" },
    Country { alpha_2: "IE", alpha_3: "IRL", name: "Ireland" },
    Country { alpha_2: "IM", alpha_3: "IMN", name: "Isle of Man" },
    Country { alpha_2: "IL", alpha_3: "ISR", name: "Israel" },
    Country { alpha_2: "IT", alpha_3: "ITA", name: "Italy" },
    Country { alpha_2: "JM", alpha_3: "JAM", name: "Jamaica" },
    Country { alpha_2: "JP", alpha_3: "JPN", name: "Japan" },
    Country { alpha_2: "JE", alpha_3: "JEY", name: "Jersey" },
    Country { alpha_2: "JO", alpha_3: "JOR", name: "Jordan" },
    Country { alpha_2: "KZ", alpha_3: "KAZ", name: "Kazakhstan" },
    Country { alpha_2: "KE", alpha_3: "KEN", name: "Kenya" },
    Country { alpha_2: "KI", alpha_3: "KIR", name: "Kiribati" },
    Country { alpha_2: "KP", alpha_3: "PRK", name: "Korea, Democratic People's Republic of" },
    Country { alpha_2: "KR", alpha_3: "KOR", name: "Korea, Republic of" },
    Country { alpha_2: "KW", alpha_3: "KWT", name: "Kuwait" },
    Country { alpha_2: "KG", alpha_3: "KGZ", name: "Kyrgyzstan" },
    Country { alpha_2: "LA", alpha_3: "LAO", name: "Lao People's Democratic Republic" },
    Country { alpha_2: "LV", alpha_3: "LVA", name: "Latvia" },
    Country { alpha_2: "LB", alpha_3: "LBN", name: "Lebanon" },
    Country { alpha_2: "LS", alpha_3: "LSO", name: "Lesotho" },
    Country { alpha_2: "LR", alpha_3: "LBR", name: "Liberia" },
    Country { alpha_2: "LY", alpha_3: "LBY", name: "Libya" },
    Country { alpha_2: "LI", alpha_3: "LIE", name: "Liechtenstein" },
    Country { alpha_2: "LT", alpha_3: "LTU", name: "Lithuania" },
    Country { alpha_2: "LU", alpha_3: "LUX", name: "Luxembourg" },
    Country { alpha_2: "MO", alpha_3: "MAC", name: "Macao" },
    Country { alpha_2: "MG", alpha_3: "MDG", name: "Madagascar" },
    Country { alpha_2: "MW", alpha_3: "MWI", name: "Malawi" },
    Country { alpha_2: "MY", alpha_3: "MYS", name: "Malaysia" },
    Country { alpha_2: "MV", alpha_3: "MDV", name: "Maldives" },
    Country { alpha_2: "ML", alpha_3: "MLI", name: "Mali" },
    Country { alpha_2: "MT", alpha_3: "MLT", name: "Malta" },
    Country { alpha_2: "MH", alpha_3: "MHL", name: "Marshall Islands" },
    Country { alpha_2: "MQ", alpha_3: "MTQ", name: "Martinique" },
    Country { alpha_2: "MR", alpha_3: "MRT", name: "Mauritania" },
    Country { alpha_2: "MU", alpha_3: "MUS", name: "Mauritius" },
    Country { alpha_2: "YT", alpha_3: "MYT", name: "Mayotte" },
    Country { alpha_2: "MX", alpha_3: "MEX", name: "Mexico" },
    Country { alpha_2: "FM", alpha_3: "FSM", name: "Micronesia, Federated States of" },
    Country { alpha_2: "MD", alpha_3: "MDA", name: "Moldova, Republic of" },
    Country { alpha_2: "MC", alpha_3: "MCO", name: "Monaco" },
    Country { alpha_2: "MN", alpha_3: "MNG", name: "Mongolia" },
    Country { alpha_2: "ME", alpha_3: "MNE", name: "Montenegro" },
    Country { alpha_2: "MS", alpha_3: "MSR", name: "Montserrat" },
    Country { alpha_2: "MA", alpha_3: "MAR", name: "Morocco" },
    Country { alpha_2: "MZ", alpha_3: "MOZ", name: "Mozambique" },
    Country { alpha_2: "MM", alpha_3: "MMR", name: "Myanmar" },
    Country { alpha_2: "NA", alpha_3: "NAM", name: "Namibia" },
    Country { alpha_2: "NR", alpha_3: "NRU", name: "Nauru" },
    Country { alpha_2: "NP", alpha_3: "NPL", name: "Nepal" },
    Country { alpha_2: "NL", alpha_3: "NLD", name: "Netherlands" },
    Country { alpha_2: "NC", alpha_3: "NCL", name: "New Caledonia" },
    Country { alpha_2: "NZ", alpha_3: "NZL", name: "New Zealand" },
    Country { alpha_2: "NI", alpha_3: "NIC", name: "Nicaragua" },
    Country { alpha_2: "NE", alpha_3: "NER", name: "Niger" },
    Country { alpha_2: "NG", alpha_3: "NGA", name: "Nigeria" },
    Country { alpha_2: "NU", alpha_3: "NIU", name: "Niue" },
    Country { alpha_2: "NF", alpha_3: "NFK", name: "Norfolk Island" },
    Country { alpha_2: "MK", alpha_3: "MKD", name: "North Macedonia" },
    Country { alpha_2: "MP", alpha_3: "MNP", name: "Northern Mariana Islands" },
    Country { alpha_2: "NO", alpha_3: "NOR", name: "Norway" },
    Country { alpha_2: "OM", alpha_3: "OMN", name: "Oman" },
    Country { alpha_2: "PK", alpha_3: "PAK", name: "Pakistan" },
    Country { alpha_2: "PW", alpha_3: "PLW", name: "Palau" },
    Country { alpha_2: "PS", alpha_3: "PSE", name: "Palestine, State of" },
    Country { alpha_2: "PA", alpha_3: "PAN", name: "Panama" },
    Country { alpha_2: "PG", alpha_3: "PNG", name: "Papua New Guinea" },
    Country { alpha_2: "PY", alpha_3: "PRY", name: "Paraguay" },
    Country { alpha_2: "PE", alpha_3: "PER", name: "Peru" },
    Country { alpha_2: "PH", alpha_3: "PHL", name: "Philippines" },
    Country { alpha_2: "PN", alpha_3: "PCN", name: "Pitcairn" },
    Country { alpha_2: "PL", alpha_3: "POL", name: "Poland" },
    Country { alpha_2: "PT", alpha_3: "PRT", name: "Portugal" },
    Country { alpha_2: "PR", alpha_3: "PRI", name: "Puerto Rico" },
    Country { alpha_2: "QA", alpha_3: "QAT", name: "Qatar" },
    Country { alpha_2: "RE", alpha_3: "REU", name: "Réunion" },
    Country { alpha_2: "RO", alpha_3: "ROU", name: "Romania" },
    Country { alpha_2: "RU", alpha_3: "RUS", name: "Russian Federation" },
    Country { alpha_2: "RW", alpha_3: "RWA", name: "Rwanda" },
    Country { alpha_2: "BL", alpha_3: "BLM", name: "Saint Barthélemy" },
    Country { alpha_2: "SH", alpha_3: "SHN", name: "Saint Helena, Ascension and Tristan da Cunha" },
    Country { alpha_2: "KN", alpha_3: "KNA", name: "Saint Kitts and Nevis" },
    Country { alpha_2: "LC", alpha_3: "LCA", name: "Saint Lucia" },
    Country { alpha_2: "MF", alpha_3: "MAF", name: "Saint Martin (French part)" },
    Country { alpha_2: "PM", alpha_3: "SPM", name: "Saint Pierre and Miquelon" },
    Country { alpha_2: "VC", alpha_3: "VCT", name: "Saint Vincent and the Grenadines" },
    Country { alpha_2: "WS", alpha_3: "WSM", name: "Samoa" },
    Country { alpha_2: "SM", alpha_3: "SMR", name: "San Marino" },
    Country { alpha_2: "ST", alpha_3: "STP", name: "Sao Tome and Principe" },
    Country { alpha_2: "SA", alpha_3: "SAU", name: "Saudi Arabia" },
    Country { alpha_2: "SN", alpha_3: "SEN", name: "Senegal" },
    Country { alpha_2: "RS", alpha_3: "SRB", name: "Serbia" },
    Country { alpha_2: "SC", alpha_3: "SYC", name: "Seychelles" },
    Country { alpha_2: "SL", alpha_3: "SLE", name: "Sierra Leone" },
    Country { alpha_2: "SG", alpha_3: "SGP", name: "Singapore" },
    Country { alpha_2: "SX", alpha_3: "SXM", name: "Sint Maarten (Dutch part)" },
    Country { alpha_2: "SK", alpha_3: "SVK", name: "Slovakia" },
    Country { alpha_2: "SI", alpha_3: "SVN", name: "Slovenia" },
    Country { alpha_2: "SB", alpha_3: "SLB", name: "Solomon Islands" },
    Country { alpha_2: "SO", alpha_3: "SOM", name: "Somalia" },
    Country { alpha_2: "ZA", alpha_3: "ZAF", name: "South Africa" },
    Country { alpha_2: "GS", alpha_3: "SGS", name: "South Georgia and the South Sandwich Islands" },
    Country { alpha_2: "SS", alpha_3: "SSD", name: "South Sudan" },
    Country { alpha_2: "ES", alpha_3: "ESP", name: "Spain" },
    Country { alpha_2: "LK", alpha_3: "LKA", name: "Sri Lanka" },
    Country { alpha_2: "SD", alpha_3: "SDN", name: "Sudan" },
    Country { alpha_2: "SR", alpha_3: "SUR", name: "Suriname" },
    Country { alpha_2: "SJ", alpha_3: "SJM", name: "Svalbard and Jan Mayen" },
    Country { alpha_2: "SE", alpha_3: "SWE", name: "Sweden" },
    Country { alpha_2: "CH", alpha_3: "CHE", name: "Switzerland" },
    Country { alpha_2: "SY", alpha_3: "SYR", name: "Syrian Arab Republic" },
    Country { alpha_2: "TW", alpha_3: "TWN", name: "Taiwan, Province of China" },
    Country { alpha_2: "TJ", alpha_3: "TJK", name: "Tajikistan" },
    Country { alpha_2: "TZ", alpha_3: "TZA", name: "Tanzania, United Republic of" },
    Country { alpha_2: "TH", alpha_3: "THA", name: "Thailand" },
    Country { alpha_2: "TL", alpha_3: "TLS", name: "Timor-Leste" },
    Country { alpha_2: "TG", alpha_3: "TGO", name: "Togo" },
    Country { alpha_2: "TK", alpha_3: "TKL", name: "Tokelau" },
    Country { alpha_2: "TO", alpha_3: "TON", name: "Tonga" },
    Country { alpha_2: "TT", alpha_3: "TTO", name: "Trinidad and Tobago" },
    Country { alpha_2: "TN", alpha_3: "TUN", name: "Tunisia" },
    Country { alpha_2: "TR", alpha_3: "TUR", name: "Türkiye" },
    Country { alpha_2: "TM", alpha_3: "TKM", name: "Turkmenistan" },
    Country { alpha_2: "TC", alpha_3: "TCA", name: "Turks and Caicos Islands" },
    Country { alpha_2: "TV", alpha_3: "TUV", name: "Tuvalu" },
    Country { alpha_2: "UG", alpha_3: "UGA", name: "Uganda" },
    Country { alpha_2: "UA", alpha_3: "UKR", name: "Ukraine" },
    Country { alpha_2: "AE", alpha_3: "ARE", name: "United Arab Emirates" },
    Country { alpha_2: "GB", alpha_3: "GBR", name: "United Kingdom" },
    Country { alpha_2: "US", alpha_3: "USA", name: "United States" },
    Country { alpha_2: "UM", alpha_3: "UMI", name: "United States Minor Outlying Islands" },
    Country { alpha_2: "UY", alpha_3: "URY", name: "Uruguay" },
    Country { alpha_2: "UZ", alpha_3: "UZB", name: "Uzbekistan" },
    Country { alpha_2: "VU", alpha_3: "VUT", name: "Vanuatu" },
    Country { alpha_2: "VE", alpha_3: "VEN", name: "Venezuela, Bolivarian Republic of" },
    Country { alpha_2: "VN", alpha_3: "VNM", name: "Viet Nam" },
    Country { alpha_2: "VG", alpha_3: "VGB", name: "Virgin Islands, British" },
    Country { alpha_2: "VI", alpha_3: "VIR", name: "Virgin Islands, U.S." },
    Country { alpha_2: "WF", alpha_3: "WLF", name: "Wallis and Futuna" },
    Country { alpha_2: "EH", alpha_3: "ESH", name: "Western Sahara" },
    Country { alpha_2: "YE", alpha_3: "YEM", name: "Yemen" },
    Country { alpha_2: "ZM", alpha_3: "ZMB", name: "Zambia" },
    Country { alpha_2: "ZW", alpha_3: "ZWE", name: "Zimbabwe" },
];
