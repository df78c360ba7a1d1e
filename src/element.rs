//! Periodic table data and element lookup.

/// A chemical element from the periodic table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Standard atomic weight in g/mol. Elements without a stable isotope use
    /// the mass of their most stable known isotope.
    pub molar_mass: f64,
}

const ELEMENT_COUNT: usize = 118;

/// Elements 1–118 (H through Og), ordered by atomic number.
static ELEMENTS: [Element; ELEMENT_COUNT] = [
    Element { atomic_number: 1, symbol: "H", name: "Hydrogen", molar_mass: 1.00784 },
    Element { atomic_number: 2, symbol: "He", name: "Helium", molar_mass: 4.002602 },
    Element { atomic_number: 3, symbol: "Li", name: "Lithium", molar_mass: 6.941 },
    Element { atomic_number: 4, symbol: "Be", name: "Beryllium", molar_mass: 9.0121831 },
    Element { atomic_number: 5, symbol: "B", name: "Boron", molar_mass: 10.811 },
    Element { atomic_number: 6, symbol: "C", name: "Carbon", molar_mass: 12.011 },
    Element { atomic_number: 7, symbol: "N", name: "Nitrogen", molar_mass: 14.007 },
    Element { atomic_number: 8, symbol: "O", name: "Oxygen", molar_mass: 15.999 },
    Element { atomic_number: 9, symbol: "F", name: "Fluorine", molar_mass: 18.998403162 },
    Element { atomic_number: 10, symbol: "Ne", name: "Neon", molar_mass: 20.1797 },
    Element { atomic_number: 11, symbol: "Na", name: "Sodium", molar_mass: 22.98976928 },
    Element { atomic_number: 12, symbol: "Mg", name: "Magnesium", molar_mass: 24.305 },
    Element { atomic_number: 13, symbol: "Al", name: "Aluminum", molar_mass: 26.9815384 },
    Element { atomic_number: 14, symbol: "Si", name: "Silicon", molar_mass: 28.0855 },
    Element { atomic_number: 15, symbol: "P", name: "Phosphorus", molar_mass: 30.973762 },
    Element { atomic_number: 16, symbol: "S", name: "Sulfur", molar_mass: 32.065 },
    Element { atomic_number: 17, symbol: "Cl", name: "Chlorine", molar_mass: 35.453 },
    Element { atomic_number: 18, symbol: "Ar", name: "Argon", molar_mass: 39.948 },
    Element { atomic_number: 19, symbol: "K", name: "Potassium", molar_mass: 39.0983 },
    Element { atomic_number: 20, symbol: "Ca", name: "Calcium", molar_mass: 40.078 },
    Element { atomic_number: 21, symbol: "Sc", name: "Scandium", molar_mass: 44.955912 },
    Element { atomic_number: 22, symbol: "Ti", name: "Titanium", molar_mass: 47.867 },
    Element { atomic_number: 23, symbol: "V", name: "Vanadium", molar_mass: 50.9415 },
    Element { atomic_number: 24, symbol: "Cr", name: "Chromium", molar_mass: 51.9961 },
    Element { atomic_number: 25, symbol: "Mn", name: "Manganese", molar_mass: 54.938044 },
    Element { atomic_number: 26, symbol: "Fe", name: "Iron", molar_mass: 55.845 },
    Element { atomic_number: 27, symbol: "Co", name: "Cobalt", molar_mass: 58.933195 },
    Element { atomic_number: 28, symbol: "Ni", name: "Nickel", molar_mass: 58.6934 },
    Element { atomic_number: 29, symbol: "Cu", name: "Copper", molar_mass: 63.546 },
    Element { atomic_number: 30, symbol: "Zn", name: "Zinc", molar_mass: 65.38 },
    Element { atomic_number: 31, symbol: "Ga", name: "Gallium", molar_mass: 69.723 },
    Element { atomic_number: 32, symbol: "Ge", name: "Germanium", molar_mass: 72.64 },
    Element { atomic_number: 33, symbol: "As", name: "Arsenic", molar_mass: 74.9216 },
    Element { atomic_number: 34, symbol: "Se", name: "Selenium", molar_mass: 78.971 },
    Element { atomic_number: 35, symbol: "Br", name: "Bromine", molar_mass: 79.904 },
    Element { atomic_number: 36, symbol: "Kr", name: "Krypton", molar_mass: 83.798 },
    Element { atomic_number: 37, symbol: "Rb", name: "Rubidium", molar_mass: 85.4678 },
    Element { atomic_number: 38, symbol: "Sr", name: "Strontium", molar_mass: 87.62 },
    Element { atomic_number: 39, symbol: "Y", name: "Yttrium", molar_mass: 88.90585 },
    Element { atomic_number: 40, symbol: "Zr", name: "Zirconium", molar_mass: 91.224 },
    Element { atomic_number: 41, symbol: "Nb", name: "Niobium", molar_mass: 92.90638 },
    Element { atomic_number: 42, symbol: "Mo", name: "Molybdenum", molar_mass: 95.95 },
    Element { atomic_number: 43, symbol: "Tc", name: "Technetium", molar_mass: 98.0 },
    Element { atomic_number: 44, symbol: "Ru", name: "Ruthenium", molar_mass: 101.07 },
    Element { atomic_number: 45, symbol: "Rh", name: "Rhodium", molar_mass: 102.9055 },
    Element { atomic_number: 46, symbol: "Pd", name: "Palladium", molar_mass: 106.42 },
    Element { atomic_number: 47, symbol: "Ag", name: "Silver", molar_mass: 107.8682 },
    Element { atomic_number: 48, symbol: "Cd", name: "Cadmium", molar_mass: 112.414 },
    Element { atomic_number: 49, symbol: "In", name: "Indium", molar_mass: 114.818 },
    Element { atomic_number: 50, symbol: "Sn", name: "Tin", molar_mass: 118.710 },
    Element { atomic_number: 51, symbol: "Sb", name: "Antimony", molar_mass: 121.760 },
    Element { atomic_number: 52, symbol: "Te", name: "Tellurium", molar_mass: 127.60 },
    Element { atomic_number: 53, symbol: "I", name: "Iodine", molar_mass: 126.90447 },
    Element { atomic_number: 54, symbol: "Xe", name: "Xenon", molar_mass: 131.293 },
    Element { atomic_number: 55, symbol: "Cs", name: "Cesium", molar_mass: 132.9054519 },
    Element { atomic_number: 56, symbol: "Ba", name: "Barium", molar_mass: 137.327 },
    Element { atomic_number: 57, symbol: "La", name: "Lanthanum", molar_mass: 138.90547 },
    Element { atomic_number: 58, symbol: "Ce", name: "Cerium", molar_mass: 140.116 },
    Element { atomic_number: 59, symbol: "Pr", name: "Praseodymium", molar_mass: 140.90765 },
    Element { atomic_number: 60, symbol: "Nd", name: "Neodymium", molar_mass: 144.242 },
    Element { atomic_number: 61, symbol: "Pm", name: "Promethium", molar_mass: 145.0 },
    Element { atomic_number: 62, symbol: "Sm", name: "Samarium", molar_mass: 150.36 },
    Element { atomic_number: 63, symbol: "Eu", name: "Europium", molar_mass: 151.964 },
    Element { atomic_number: 64, symbol: "Gd", name: "Gadolinium", molar_mass: 157.25 },
    Element { atomic_number: 65, symbol: "Tb", name: "Terbium", molar_mass: 158.92535 },
    Element { atomic_number: 66, symbol: "Dy", name: "Dysprosium", molar_mass: 162.500 },
    Element { atomic_number: 67, symbol: "Ho", name: "Holmium", molar_mass: 164.93032 },
    Element { atomic_number: 68, symbol: "Er", name: "Erbium", molar_mass: 167.259 },
    Element { atomic_number: 69, symbol: "Tm", name: "Thulium", molar_mass: 168.93421 },
    Element { atomic_number: 70, symbol: "Yb", name: "Ytterbium", molar_mass: 173.045 },
    Element { atomic_number: 71, symbol: "Lu", name: "Lutetium", molar_mass: 174.9668 },
    Element { atomic_number: 72, symbol: "Hf", name: "Hafnium", molar_mass: 178.486 },
    Element { atomic_number: 73, symbol: "Ta", name: "Tantalum", molar_mass: 180.94788 },
    Element { atomic_number: 74, symbol: "W", name: "Tungsten", molar_mass: 183.84 },
    Element { atomic_number: 75, symbol: "Re", name: "Rhenium", molar_mass: 186.207 },
    Element { atomic_number: 76, symbol: "Os", name: "Osmium", molar_mass: 190.23 },
    Element { atomic_number: 77, symbol: "Ir", name: "Iridium", molar_mass: 192.217 },
    Element { atomic_number: 78, symbol: "Pt", name: "Platinum", molar_mass: 195.084 },
    Element { atomic_number: 79, symbol: "Au", name: "Gold", molar_mass: 196.966570 },
    Element { atomic_number: 80, symbol: "Hg", name: "Mercury", molar_mass: 200.59 },
    Element { atomic_number: 81, symbol: "Tl", name: "Thallium", molar_mass: 204.3833 },
    Element { atomic_number: 82, symbol: "Pb", name: "Lead", molar_mass: 207.2 },
    Element { atomic_number: 83, symbol: "Bi", name: "Bismuth", molar_mass: 208.98040 },
    Element { atomic_number: 84, symbol: "Po", name: "Polonium", molar_mass: 208.98243 },
    Element { atomic_number: 85, symbol: "At", name: "Astatine", molar_mass: 209.98715 },
    Element { atomic_number: 86, symbol: "Rn", name: "Radon", molar_mass: 222.01758 },
    Element { atomic_number: 87, symbol: "Fr", name: "Francium", molar_mass: 223.01973 },
    Element { atomic_number: 88, symbol: "Ra", name: "Radium", molar_mass: 226.02541 },
    Element { atomic_number: 89, symbol: "Ac", name: "Actinium", molar_mass: 227.02775 },
    Element { atomic_number: 90, symbol: "Th", name: "Thorium", molar_mass: 232.0377 },
    Element { atomic_number: 91, symbol: "Pa", name: "Protactinium", molar_mass: 231.03588 },
    Element { atomic_number: 92, symbol: "U", name: "Uranium", molar_mass: 238.0289 },
    Element { atomic_number: 93, symbol: "Np", name: "Neptunium", molar_mass: 237.048172 },
    Element { atomic_number: 94, symbol: "Pu", name: "Plutonium", molar_mass: 244.06420 },
    Element { atomic_number: 95, symbol: "Am", name: "Americium", molar_mass: 243.061380 },
    Element { atomic_number: 96, symbol: "Cm", name: "Curium", molar_mass: 247.07035 },
    Element { atomic_number: 97, symbol: "Bk", name: "Berkelium", molar_mass: 247.07031 },
    Element { atomic_number: 98, symbol: "Cf", name: "Californium", molar_mass: 251.07959 },
    Element { atomic_number: 99, symbol: "Es", name: "Einsteinium", molar_mass: 252.0830 },
    Element { atomic_number: 100, symbol: "Fm", name: "Fermium", molar_mass: 257.09511 },
    Element { atomic_number: 101, symbol: "Md", name: "Mendelevium", molar_mass: 258.09843 },
    Element { atomic_number: 102, symbol: "No", name: "Nobelium", molar_mass: 259.10100 },
    Element { atomic_number: 103, symbol: "Lr", name: "Lawrencium", molar_mass: 266.120 },
    Element { atomic_number: 104, symbol: "Rf", name: "Rutherfordium", molar_mass: 267.122 },
    Element { atomic_number: 105, symbol: "Db", name: "Dubnium", molar_mass: 268.126 },
    Element { atomic_number: 106, symbol: "Sg", name: "Seaborgium", molar_mass: 269.128 },
    Element { atomic_number: 107, symbol: "Bh", name: "Bohrium", molar_mass: 270.133 },
    Element { atomic_number: 108, symbol: "Hs", name: "Hassium", molar_mass: 269.1336 },
    Element { atomic_number: 109, symbol: "Mt", name: "Meitnerium", molar_mass: 277.154 },
    Element { atomic_number: 110, symbol: "Ds", name: "Darmstadtium", molar_mass: 282.166 },
    Element { atomic_number: 111, symbol: "Rg", name: "Roentgenium", molar_mass: 282.169 },
    Element { atomic_number: 112, symbol: "Cn", name: "Copernicium", molar_mass: 286.179 },
    Element { atomic_number: 113, symbol: "Nh", name: "Nihonium", molar_mass: 286.182 },
    Element { atomic_number: 114, symbol: "Fl", name: "Flerovium", molar_mass: 290.192 },
    Element { atomic_number: 115, symbol: "Mc", name: "Moscovium", molar_mass: 290.196 },
    Element { atomic_number: 116, symbol: "Lv", name: "Livermorium", molar_mass: 293.205 },
    Element { atomic_number: 117, symbol: "Ts", name: "Tennessine", molar_mass: 294.211 },
    Element { atomic_number: 118, symbol: "Og", name: "Oganesson", molar_mass: 295.216 },
];

/// The full periodic table, ascending by atomic number.
pub fn periodic_table() -> &'static [Element] {
    &ELEMENTS
}

/// Look up an element by its symbol (e.g. "C", "Fe"). Matching is exact and
/// case-sensitive, so "fe" and "FE" are not found.
pub fn element_by_symbol(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

/// Look up an element by its atomic number (1-based).
pub fn element_by_number(n: u8) -> Option<&'static Element> {
    match n {
        1..=118 => Some(&ELEMENTS[(n - 1) as usize]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_dense_and_ordered() {
        let table = periodic_table();
        assert_eq!(table.len(), 118);
        for (i, e) in table.iter().enumerate() {
            assert_eq!(e.atomic_number as usize, i + 1, "{} is out of place", e.symbol);
            assert!(e.molar_mass > 0.0, "{} has no mass", e.symbol);
        }
    }

    #[test]
    fn symbols_are_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for e in periodic_table() {
            assert!(seen.insert(e.symbol), "duplicate symbol {}", e.symbol);
            let mut chars = e.symbol.chars();
            assert!(chars.next().is_some_and(|c| c.is_ascii_uppercase()));
            assert!(chars.all(|c| c.is_ascii_lowercase()));
            assert!(e.symbol.len() <= 2);
        }
    }

    #[test]
    fn lookup_by_symbol() {
        let fe = element_by_symbol("Fe").unwrap();
        assert_eq!(fe.atomic_number, 26);
        assert_eq!(fe.name, "Iron");
        assert_eq!(element_by_symbol("Og").unwrap().atomic_number, 118);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(element_by_symbol("fe").is_none());
        assert!(element_by_symbol("FE").is_none());
        assert!(element_by_symbol("Xx").is_none());
        assert!(element_by_symbol("").is_none());
    }

    #[test]
    fn every_symbol_round_trips() {
        for e in periodic_table() {
            assert_eq!(element_by_symbol(e.symbol), Some(e));
        }
    }

    #[test]
    fn lookup_by_number() {
        assert_eq!(element_by_number(1).unwrap().symbol, "H");
        assert_eq!(element_by_number(118).unwrap().symbol, "Og");
        assert!(element_by_number(0).is_none());
        assert!(element_by_number(119).is_none());
    }
}
