use arch::symbol::{MAX_ADDR, PREDEFINED, VAR_BASE};
use indexmap::IndexMap;

use crate::error::Error;

/// Identifier -> address, in insertion order.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: IndexMap<String, u16>,
    /// Next free RAM slot for a variable
    next_var: u16,
}

impl SymbolTable {
    /// A table holding only the predefined symbols.
    pub fn new() -> Self {
        SymbolTable {
            symbols: PREDEFINED
                .iter()
                .map(|&(name, addr)| (name.to_string(), addr))
                .collect(),
            next_var: VAR_BASE,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).copied()
    }

    /// Bind `name` to `addr`. Binding a name again to the address it already
    /// holds leaves the table untouched; any other re-binding fails.
    pub fn bind(&mut self, name: &str, addr: u16) -> Result<(), Error> {
        match self.lookup(name) {
            Some(old) if old == addr => Ok(()),
            Some(old) => Err(Error::RedefinedSymbol {
                name: name.to_string(),
                old,
                new: addr,
            }),
            None => {
                self.symbols.insert(name.to_string(), addr);
                Ok(())
            }
        }
    }

    /// Address of `name`, allocating the next free RAM slot on first use.
    pub fn allocate_variable(&mut self, name: &str) -> Result<u16, Error> {
        if let Some(addr) = self.lookup(name) {
            return Ok(addr);
        }
        if self.next_var > MAX_ADDR {
            return Err(Error::AddressOutOfRange(name.to_string()));
        }
        let addr = self.next_var;
        self.symbols.insert(name.to_string(), addr);
        self.next_var += 1;
        Ok(addr)
    }

    pub fn next_var(&self) -> u16 {
        self.next_var
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.symbols.iter().map(|(name, addr)| (name.as_str(), *addr))
    }

    /// The table as a YAML mapping, in insertion order.
    pub fn to_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(&self.symbols).map_err(Error::Serialize)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined() {
        let table = SymbolTable::new();
        assert_eq!(table.len(), 23);
        assert_eq!(table.lookup("R15"), Some(15));
        assert_eq!(table.lookup("SP"), table.lookup("R0"));
        assert_eq!(table.lookup("LCL"), table.lookup("R1"));
        assert_eq!(table.lookup("SCREEN"), Some(16384));
        assert_eq!(table.lookup("KBD"), Some(24576));
        assert_eq!(table.lookup("r0"), None);
    }

    #[test]
    fn test_bind() {
        let mut table = SymbolTable::new();
        table.bind("LOOP", 4).unwrap();
        assert_eq!(table.lookup("LOOP"), Some(4));

        // same address again is a no-op
        let before = table.len();
        table.bind("LOOP", 4).unwrap();
        assert_eq!(table.len(), before);
        assert_eq!(table.lookup("LOOP"), Some(4));

        assert!(matches!(
            table.bind("LOOP", 5),
            Err(Error::RedefinedSymbol { old: 4, new: 5, .. })
        ));
        assert_eq!(table.lookup("LOOP"), Some(4));
        assert!(table.bind("SP", 1).is_err());
        assert!(table.bind("SP", 0).is_ok());
    }

    #[test]
    fn test_allocate_variable() {
        let mut table = SymbolTable::new();
        assert_eq!(table.allocate_variable("foo").unwrap(), 16);
        assert_eq!(table.allocate_variable("bar").unwrap(), 17);
        assert_eq!(table.allocate_variable("foo").unwrap(), 16);
        assert_eq!(table.allocate_variable("R3").unwrap(), 3);
        assert_eq!(table.next_var(), 18);
    }

    #[test]
    fn test_allocate_variable_exhausted() {
        let mut table = SymbolTable::new();
        for idx in VAR_BASE..=MAX_ADDR {
            table.allocate_variable(&format!("v{idx}")).unwrap();
        }
        assert!(matches!(
            table.allocate_variable("one_more"),
            Err(Error::AddressOutOfRange(_))
        ));
        assert_eq!(table.allocate_variable("v16").unwrap(), 16);
    }

    #[test]
    fn test_iter_keeps_insertion_order() {
        let mut table = SymbolTable::new();
        table.bind("END", 10).unwrap();
        table.allocate_variable("i").unwrap();
        let tail: Vec<_> = table.iter().skip(23).collect();
        assert_eq!(tail, vec![("END", 10), ("i", 16)]);
        let yaml = table.to_yaml().unwrap();
        assert!(yaml.starts_with("R0: 0\n"));
        assert!(yaml.ends_with("END: 10\ni: 16\n"));
    }
}
