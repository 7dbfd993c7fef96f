use super::record::ElementGroup;
use phf::{Set, phf_set};

/// Primary reference for atomic masses.
pub const PUBCHEM_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/ptable/atomic-mass/";

/// Secondary reference, used for the symbols in [`ALTERNATE_SOURCE_SYMBOLS`].
pub const RSC_URL: &str = "https://periodic-table.rsc.org/";

/// Elements whose atomic mass was taken from [`RSC_URL`] rather than [`PUBCHEM_URL`].
pub static ALTERNATE_SOURCE_SYMBOLS: Set<&'static str> = phf_set! {
    "Li", "Ar", "Zn", "Se", "Br", "Kr", "Ru", "Cd", "Ba", "Nd", "Sm",
    "Er", "Yb", "Hf", "Os", "Ir", "Pt", "Hg", "Pb",
};

/// `(name, symbol, atomic_mass, group)` as laid out in the embedded table.
pub type ElementEntry = (&'static str, &'static str, f64, ElementGroup);

use ElementGroup::*;

/// All 118 known elements in order of atomic number.
///
/// Sulfur carries 32.065, the mean of the PubChem (32.07) and RSC (32.06) values.
pub static ELEMENT_DATA: [ElementEntry; 118] = [
    ("Hydrogen", "H", 1.008, Nonmetal),
    ("Helium", "He", 4.0026, NobleGas),
    ("Lithium", "Li", 6.941, AlkaliMetal),
    ("Beryllium", "Be", 9.012183, AlkalineEarthMetal),
    ("Boron", "B", 10.81, Metalloid),
    ("Carbon", "C", 12.011, Nonmetal),
    ("Nitrogen", "N", 14.007, Nonmetal),
    ("Oxygen", "O", 15.999, Nonmetal),
    ("Fluorine", "F", 18.99840316, Halogen),
    ("Neon", "Ne", 20.18, NobleGas),
    ("Sodium", "Na", 22.9897693, AlkaliMetal),
    ("Magnesium", "Mg", 24.305, AlkalineEarthMetal),
    ("Aluminium", "Al", 26.981538, PostTransitionMetal),
    ("Silicon", "Si", 28.085, Metalloid),
    ("Phosphorus", "P", 30.97376200, Nonmetal),
    ("Sulfur", "S", 32.065, Nonmetal),
    ("Chlorine", "Cl", 35.45, Halogen),
    ("Argon", "Ar", 39.95, NobleGas),
    ("Potassium", "K", 39.0983, AlkaliMetal),
    ("Calcium", "Ca", 40.08, AlkalineEarthMetal),
    ("Scandium", "Sc", 44.95591, TransitionMetal),
    ("Titanium", "Ti", 47.867, TransitionMetal),
    ("Vanadium", "V", 50.9415, TransitionMetal),
    ("Chromium", "Cr", 51.996, TransitionMetal),
    ("Manganese", "Mn", 54.93804, TransitionMetal),
    ("Iron", "Fe", 55.84, TransitionMetal),
    ("Cobalt", "Co", 58.93319, TransitionMetal),
    ("Nickel", "Ni", 58.693, TransitionMetal),
    ("Copper", "Cu", 63.55, TransitionMetal),
    ("Zinc", "Zn", 65.38, TransitionMetal),
    ("Gallium", "Ga", 69.723, PostTransitionMetal),
    ("Germanium", "Ge", 72.63, Metalloid),
    ("Arsenic", "As", 74.92159, Metalloid),
    ("Selenium", "Se", 78.971, Nonmetal),
    ("Bromine", "Br", 79.904, Halogen),
    ("Krypton", "Kr", 83.798, NobleGas),
    ("Rubidium", "Rb", 85.468, AlkaliMetal),
    ("Strontium", "Sr", 87.62, AlkalineEarthMetal),
    ("Yttrium", "Y", 88.90584, TransitionMetal),
    ("Zirconium", "Zr", 91.22, TransitionMetal),
    ("Niobium", "Nb", 92.90637, TransitionMetal),
    ("Molybdenum", "Mo", 95.95, TransitionMetal),
    ("Technetium", "Tc", 96.90636, TransitionMetal),
    ("Ruthenium", "Ru", 101.07, TransitionMetal),
    ("Rhodium", "Rh", 102.9055, TransitionMetal),
    ("Palladium", "Pd", 106.42, TransitionMetal),
    ("Silver", "Ag", 107.868, TransitionMetal),
    ("Cadmium", "Cd", 112.414, TransitionMetal),
    ("Indium", "In", 114.818, PostTransitionMetal),
    ("Tin", "Sn", 118.71, PostTransitionMetal),
    ("Antimony", "Sb", 121.760, Metalloid),
    ("Tellurium", "Te", 127.6, Metalloid),
    ("Iodine", "I", 126.9045, Halogen),
    ("Xenon", "Xe", 131.29, NobleGas),
    ("Cesium", "Cs", 132.9054520, AlkaliMetal),
    ("Barium", "Ba", 137.327, AlkalineEarthMetal),
    ("Lanthanum", "La", 138.9055, Lanthanide),
    ("Cerium", "Ce", 140.116, Lanthanide),
    ("Praseodymium", "Pr", 140.90766, Lanthanide),
    ("Neodymium", "Nd", 144.242, Lanthanide),
    ("Promethium", "Pm", 144.91276, Lanthanide),
    ("Samarium", "Sm", 150.36, Lanthanide),
    ("Europium", "Eu", 151.964, Lanthanide),
    ("Gadolinium", "Gd", 157.25, Lanthanide),
    ("Terbium", "Tb", 158.92535, Lanthanide),
    ("Dysprosium", "Dy", 162.500, Lanthanide),
    ("Holmium", "Ho", 164.93033, Lanthanide),
    ("Erbium", "Er", 167.259, Lanthanide),
    ("Thulium", "Tm", 168.93422, Lanthanide),
    ("Ytterbium", "Yb", 173.045, Lanthanide),
    ("Lutetium", "Lu", 174.9667, Lanthanide),
    ("Hafnium", "Hf", 178.486, TransitionMetal),
    ("Tantalum", "Ta", 180.9479, TransitionMetal),
    ("Tungsten", "W", 183.84, TransitionMetal),
    ("Rhenium", "Re", 186.207, TransitionMetal),
    ("Osmium", "Os", 190.23, TransitionMetal),
    ("Iridium", "Ir", 192.217, TransitionMetal),
    ("Platinum", "Pt", 195.084, TransitionMetal),
    ("Gold", "Au", 196.96657, TransitionMetal),
    ("Mercury", "Hg", 200.592, TransitionMetal),
    ("Thallium", "Tl", 204.383, PostTransitionMetal),
    ("Lead", "Pb", 207.2, PostTransitionMetal),
    ("Bismuth", "Bi", 208.98040, PostTransitionMetal),
    ("Polonium", "Po", 208.98243, Metalloid),
    ("Astatine", "At", 209.98715, Halogen),
    ("Radon", "Rn", 222.01758, NobleGas),
    ("Francium", "Fr", 223.01973, AlkaliMetal),
    ("Radium", "Ra", 226.02541, AlkalineEarthMetal),
    ("Actinium", "Ac", 227.02775, Actinide),
    ("Thorium", "Th", 232.038, Actinide),
    ("Protactinium", "Pa", 231.03588, Actinide),
    ("Uranium", "U", 238.0289, Actinide),
    ("Neptunium", "Np", 237.048172, Actinide),
    ("Plutonium", "Pu", 244.06420, Actinide),
    ("Americium", "Am", 243.061380, Actinide),
    ("Curium", "Cm", 247.07035, Actinide),
    ("Berkelium", "Bk", 247.07031, Actinide),
    ("Californium", "Cf", 251.07959, Actinide),
    ("Einsteinium", "Es", 252.0830, Actinide),
    ("Fermium", "Fm", 257.09511, Actinide),
    ("Mendelevium", "Md", 258.09843, Actinide),
    ("Nobelium", "No", 259.10100, Actinide),
    ("Lawrencium", "Lr", 266.120, Actinide),
    ("Rutherfordium", "Rf", 267.122, TransitionMetal),
    ("Dubnium", "Db", 268.126, TransitionMetal),
    ("Seaborgium", "Sg", 269.128, TransitionMetal),
    ("Bohrium", "Bh", 270.133, TransitionMetal),
    ("Hassium", "Hs", 269.1336, TransitionMetal),
    ("Meitnerium", "Mt", 277.154, Unknown),
    ("Darmstadtium", "Ds", 282.166, Unknown),
    ("Roentgenium", "Rg", 282.169, Unknown),
    ("Copernicium", "Cn", 286.179, TransitionMetal),
    ("Nihonium", "Nh", 286.182, PostTransitionMetal),
    ("Flerovium", "Fl", 290.192, PostTransitionMetal),
    ("Moscovium", "Mc", 290.196, PostTransitionMetal),
    ("Livermorium", "Lv", 293.205, PostTransitionMetal),
    ("Tennessine", "Ts", 294.211, Halogen),
    ("Oganesson", "Og", 295.216, NobleGas),
];
