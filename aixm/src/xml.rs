// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A namespace-aware XML element tree.
//!
//! Elements are identified by namespace URI and local name, independent of
//! the prefixes used in the file. Values nested at varying depth are found
//! with [`Element::find`] and [`Element::find_all`].

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::error::Error;

/// AIXM 5.0 namespace.
pub const AIXM: &str = "http://www.aixm.aero/schema/5.0";
/// GML 3.2 namespace.
pub const GML: &str = "http://www.opengis.net/gml/3.2";
/// FAA special activity airspace namespace.
pub const SAA: &str = "urn:us:gov:dot:faa:aim:saa";
/// FAA special use airspace extension namespace.
pub const SUA: &str = "urn:us:gov:dot:faa:aim:saa:sua";

/// A parsed XML document.
#[derive(Clone, PartialEq, Debug)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Reads a whole XML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not well-formed: syntax errors,
    /// mismatched or missing end tags, unbound namespace prefixes, invalid
    /// UTF-8 or no root element at all.
    pub fn parse(data: &[u8]) -> Result<Self, Error> {
        let mut reader = NsReader::from_reader(data);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            buf.clear();
            match reader.read_resolved_event_into(&mut buf)? {
                (ns, Event::Start(ref e)) => {
                    ensure_open(&root)?;
                    stack.push(Element::from_start(ns, e)?);
                }
                (ns, Event::Empty(ref e)) => {
                    ensure_open(&root)?;
                    let element = Element::from_start(ns, e)?;
                    attach(element, &mut stack, &mut root);
                }
                (_, Event::End(_)) => {
                    // end names are checked by the reader
                    if let Some(element) = stack.pop() {
                        attach(element, &mut stack, &mut root);
                    }
                }
                (_, Event::Text(ref e)) => {
                    let text = e.unescape()?;
                    match stack.last_mut() {
                        Some(element) => element.push_text(&text),
                        None => return Err(Error::ContentOutsideRoot),
                    }
                }
                (_, Event::CData(ref e)) => {
                    let text = std::str::from_utf8(e)?;
                    match stack.last_mut() {
                        Some(element) => element.push_text(text),
                        None => return Err(Error::ContentOutsideRoot),
                    }
                }
                (_, Event::Eof) => break,
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(Error::UnclosedElement(open.name));
        }

        root.map(|root| Self { root }).ok_or(Error::MissingRoot)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}

/// Fails if a second root element would be started.
fn ensure_open(root: &Option<Element>) -> Result<(), Error> {
    match root {
        Some(_) => Err(Error::ContentOutsideRoot),
        None => Ok(()),
    }
}

/// Adds a completed element to its parent or makes it the root.
fn attach(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

/// An XML element with its attributes, text and child elements.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Element {
    namespace: Option<String>,
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn from_start(ns: ResolveResult<'_>, start: &BytesStart<'_>) -> Result<Self, Error> {
        let name = std::str::from_utf8(start.local_name().as_ref())?.to_string();

        let namespace = match ns {
            ResolveResult::Bound(ns) => Some(std::str::from_utf8(ns.as_ref())?.to_string()),
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                let prefix = String::from_utf8_lossy(&prefix);
                return Err(Error::Xml(format!("unbound prefix {prefix} of {name}")));
            }
        };

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            if attr.key.as_namespace_binding().is_some() {
                continue;
            }

            let key = std::str::from_utf8(attr.key.local_name().as_ref())?.to_string();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            namespace,
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    /// The namespace URI of this element.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The local name of this element without prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the element has the namespace and local name.
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.name == name && self.namespace.as_deref() == Some(namespace)
    }

    /// Returns the value of an attribute by its local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The text content of this element, trimmed of surrounding whitespace.
    ///
    /// Text runs split by comments or child elements are joined by a single
    /// space.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns the first direct child with the name.
    pub fn child(&self, namespace: &str, name: &str) -> Option<&Element> {
        self.children.iter().find(|e| e.is(namespace, name))
    }

    /// Iterates depth-first over all elements below this one in document
    /// order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Returns the first element below this one with the name, at any depth.
    pub fn find(&self, namespace: &str, name: &str) -> Option<&Element> {
        self.descendants().find(|e| e.is(namespace, name))
    }

    /// Returns all elements below this one with the name, at any depth.
    pub fn find_all<'a>(
        &'a self,
        namespace: &'a str,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants().filter(move |e| e.is(namespace, name))
    }
}

/// Depth-first iterator over the descendants of an [`Element`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}
