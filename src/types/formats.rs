// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 U.S. Federal Government (in countries where recognized)
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

//! Fixed enumerations defined by the Comodo SSL web service.
//!
//! The service interprets these integers literally, so the label/code pairs
//! must match its contract exactly.

use std::fmt;
use std::str::FromStr;

use crate::error::ComodoError;

/// Defines a label <-> code enumeration from a single table.
macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $name:ident, $err:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($label:literal, $code:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label the service documents for this value.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            /// The integer sent on the wire.
            pub fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Resolve a label exactly as the service spells it.
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $( $label => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Resolve a wire code.
            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ComodoError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s).ok_or_else(|| ComodoError::$err(s.to_string()))
            }
        }
    };
}

code_table! {
    /// Output format requested from `collect`.
    FormatType, UnknownFormatType {
        /// PEM certificate followed by the issuing chain.
        X509PemBundle => ("X509 PEM Bundle", 0),
        /// PEM end-entity certificate only.
        X509PemCertificateOnly => ("X509 PEM Certificate only", 1),
        /// PEM intermediate certificate only.
        X509PemIntermediateOnly => ("X509 PEM Intermediate certificate only", 2),
        /// PKCS#7 bundle, PEM armoured.
        Pkcs7PemBundle => ("PKCS#7 PEM Bundle", 3),
        /// PKCS#7 bundle, DER.
        Pkcs7DerBundle => ("PKCS#7 DER Bundle", 4),
    }
}

impl Default for FormatType {
    fn default() -> Self {
        Self::X509PemBundle
    }
}

code_table! {
    /// Server software the certificate will be installed on.
    ServerType, UnknownServerType {
        /// AOL.
        Aol => ("AOL", 1),
        /// Apache with mod_ssl.
        ApacheModSsl => ("Apache/ModSSL", 2),
        /// Apache-SSL.
        ApacheSsl => ("Apache-SSL", 3),
        /// C2Net Stronghold.
        C2NetStronghold => ("C2Net Stronghold", 4),
        /// Cobalt Raq.
        CobaltRaq => ("Cobalt Raq", 5),
        /// Covalent Server Software.
        CovalentServerSoftware => ("Covalent Server Software", 6),
        /// IBM HTTP Server.
        IbmHttpServer => ("IBM HTTP Server", 7),
        /// IBM Internet Connection Server.
        IbmInternetConnectionServer => ("IBM Internet Connection Server", 8),
        /// iPlanet.
        IPlanet => ("iPlanet", 9),
        /// Java Web Server.
        JavaWebServer => ("Java Web Server (Javasoft / Sun)", 10),
        /// Lotus Domino.
        LotusDomino => ("Lotus Domino", 11),
        /// Lotus Domino Go!.
        LotusDominoGo => ("Lotus Domino Go!", 12),
        /// Microsoft IIS 1.x to 4.x.
        MicrosoftIis1To4 => ("Microsoft IIS 1.x to 4.x", 13),
        /// Microsoft IIS 5.x and later.
        MicrosoftIis5AndLater => ("Microsoft IIS 5.x and later", 14),
        /// Netscape Enterprise Server.
        NetscapeEnterpriseServer => ("Netscape Enterprise Server", 15),
        /// Netscape FastTrac.
        NetscapeFastTrac => ("Netscape FastTrac", 16),
        /// Novell Web Server.
        NovellWebServer => ("Novell Web Server", 17),
        /// Oracle.
        Oracle => ("Oracle", 18),
        /// Quid Pro Quo.
        QuidProQuo => ("Quid Pro Quo", 19),
        /// R3 SSL Server.
        R3SslServer => ("R3 SSL Server", 20),
        /// Raven SSL.
        RavenSsl => ("Raven SSL", 21),
        /// RedHat Linux.
        RedHatLinux => ("RedHat Linux", 22),
        /// SAP Web Application Server.
        SapWebApplicationServer => ("SAP Web Application Server", 23),
        /// Tomcat.
        Tomcat => ("Tomcat", 24),
        /// Website Professional.
        WebsiteProfessional => ("Website Professional", 25),
        /// WebStar 4.x and later.
        WebStar4AndLater => ("WebStar 4.x and later", 26),
        /// WebTen.
        WebTen => ("WebTen (from Tenon)", 27),
        /// Zeus Web Server.
        ZeusWebServer => ("Zeus Web Server", 28),
        /// Ensim.
        Ensim => ("Ensim", 29),
        /// Plesk.
        Plesk => ("Plesk", 30),
        /// WHM/cPanel.
        WhmCpanel => ("WHM/cPanel", 31),
        /// H-Sphere.
        HSphere => ("H-Sphere", 32),
        /// Cisco 3000 Series VPN Concentrator.
        Cisco3000VpnConcentrator => ("Cisco 3000 Series VPN Concentrator", 33),
        /// Citrix.
        Citrix => ("Citrix", 34),
        /// Anything else.
        Other => ("OTHER", -1),
    }
}

impl Default for ServerType {
    fn default() -> Self {
        Self::Other
    }
}
